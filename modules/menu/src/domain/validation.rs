//! Request validators for menus and foods.
//!
//! Violations are collected rather than failing on the first one, and each
//! distinct violation is reported once even when several additions share it.

use canteen_errors::ValidationViolation;
use rust_decimal::Decimal;

use super::model::{
    AdditionDraft, FoodDraft, MenuDraft, SaveFoodAdditionCommand, SaveFoodCommand,
};

pub const MIN_NAME_LEN: usize = 3;

/// Validates a menu name; returns the trimmed name.
pub fn validate_menu_name(name: Option<&str>) -> Result<String, Vec<ValidationViolation>> {
    let mut errors = Vec::new();
    let name = check_name(name, "name", "Menu name", &mut errors);
    if errors.is_empty() {
        Ok(name)
    } else {
        Err(errors)
    }
}

pub fn validate_food(draft: &FoodDraft) -> Result<SaveFoodCommand, Vec<ValidationViolation>> {
    let mut errors = Vec::new();
    let command = check_food(draft, "", &mut errors);
    if errors.is_empty() {
        Ok(command)
    } else {
        Err(errors)
    }
}

/// Validates the menu name and every food it is created with.
pub fn validate_menu(
    draft: &MenuDraft,
) -> Result<(String, Vec<SaveFoodCommand>), Vec<ValidationViolation>> {
    let mut errors = Vec::new();
    let name = check_name(draft.name.as_deref(), "name", "Menu name", &mut errors);
    let foods = draft
        .foods
        .iter()
        .map(|food| check_food(food, "foods.", &mut errors))
        .collect();
    if errors.is_empty() {
        Ok((name, foods))
    } else {
        Err(errors)
    }
}

fn check_food(
    draft: &FoodDraft,
    prefix: &str,
    errors: &mut Vec<ValidationViolation>,
) -> SaveFoodCommand {
    let name = check_name(
        draft.name.as_deref(),
        &format!("{prefix}name"),
        "Food name",
        errors,
    );
    let price = check_price(draft.price, &format!("{prefix}price"), "Food price", errors);
    let additions = draft
        .additions
        .iter()
        .map(|addition| check_addition(addition, prefix, errors))
        .collect();

    SaveFoodCommand {
        name,
        price,
        description: draft
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned(),
        additions,
    }
}

fn check_addition(
    draft: &AdditionDraft,
    prefix: &str,
    errors: &mut Vec<ValidationViolation>,
) -> SaveFoodAdditionCommand {
    SaveFoodAdditionCommand {
        name: check_name(
            draft.name.as_deref(),
            &format!("{prefix}additions.name"),
            "Food addition name",
            errors,
        ),
        price: check_price(
            draft.price,
            &format!("{prefix}additions.price"),
            "Food addition price",
            errors,
        ),
    }
}

fn check_name(
    name: Option<&str>,
    field: &str,
    label: &str,
    errors: &mut Vec<ValidationViolation>,
) -> String {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        push_unique(errors, field, format!("{label} is required"));
    } else if name.chars().count() < MIN_NAME_LEN {
        push_unique(
            errors,
            field,
            format!("{label} must be at least {MIN_NAME_LEN} characters long"),
        );
    }
    name.to_owned()
}

fn check_price(
    price: Option<Decimal>,
    field: &str,
    label: &str,
    errors: &mut Vec<ValidationViolation>,
) -> Decimal {
    match price {
        None => {
            push_unique(errors, field, format!("{label} is required"));
            Decimal::ZERO
        }
        Some(p) if p < Decimal::ZERO => {
            push_unique(errors, field, format!("{label} must not be negative"));
            p
        }
        Some(p) => p,
    }
}

fn push_unique(errors: &mut Vec<ValidationViolation>, field: &str, message: String) {
    let violation = ValidationViolation::new(field, message);
    if !errors.contains(&violation) {
        errors.push(violation);
    }
}
