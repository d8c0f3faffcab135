use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::model::{AdditionDraft, Food, FoodAddition, FoodDraft, Menu, MenuDraft};

/// Prices travel as JSON numbers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodAdditionDto {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 0.1)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodDto {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 8.0)]
    pub price: Decimal,
    pub description: String,
    pub additions: Vec<FoodAdditionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuDto {
    pub id: Uuid,
    pub name: String,
    pub foods: Vec<FoodDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFoodAdditionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

/// A body with `id` asks to update that food instead of creating one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFoodRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub additions: Option<Vec<CreateFoodAdditionRequest>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateMenuRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub foods: Option<Vec<CreateFoodRequest>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteIdsRequest {
    #[serde(default)]
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChangeMenuNameRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<&FoodAddition> for FoodAdditionDto {
    fn from(a: &FoodAddition) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            price: a.price,
        }
    }
}

impl From<&Food> for FoodDto {
    fn from(f: &Food) -> Self {
        Self {
            id: f.id,
            name: f.name.clone(),
            price: f.price,
            description: f.description.clone(),
            additions: f.additions.iter().map(FoodAdditionDto::from).collect(),
        }
    }
}

impl From<&Menu> for MenuDto {
    fn from(m: &Menu) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            foods: m.foods.iter().map(FoodDto::from).collect(),
        }
    }
}

impl From<CreateFoodAdditionRequest> for AdditionDraft {
    fn from(r: CreateFoodAdditionRequest) -> Self {
        Self {
            name: r.name,
            price: r.price,
        }
    }
}

impl From<CreateFoodRequest> for FoodDraft {
    fn from(r: CreateFoodRequest) -> Self {
        Self {
            id: r.id,
            name: r.name,
            price: r.price,
            description: r.description,
            additions: r
                .additions
                .unwrap_or_default()
                .into_iter()
                .map(AdditionDraft::from)
                .collect(),
        }
    }
}

impl From<CreateMenuRequest> for MenuDraft {
    fn from(r: CreateMenuRequest) -> Self {
        Self {
            name: r.name,
            foods: r
                .foods
                .unwrap_or_default()
                .into_iter()
                .map(FoodDraft::from)
                .collect(),
        }
    }
}
