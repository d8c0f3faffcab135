use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodAddition {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub additions: Vec<FoodAddition>,
}

/// A menu with its foods in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub id: Uuid,
    pub name: String,
    pub foods: Vec<Food>,
}

/// Food as submitted by a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct FoodDraft {
    /// Set when the client tries to update an existing food
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub additions: Vec<AdditionDraft>,
}

#[derive(Debug, Clone, Default)]
pub struct AdditionDraft {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Default)]
pub struct MenuDraft {
    pub name: Option<String>,
    pub foods: Vec<FoodDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFoodAdditionCommand {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFoodCommand {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub additions: Vec<SaveFoodAdditionCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveMenuCommand {
    pub name: String,
    pub foods: Vec<SaveFoodCommand>,
}
