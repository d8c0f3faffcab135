//! Assembles menu aggregates from table rows.

use std::collections::HashMap;

use uuid::Uuid;

use super::entity::{food, food_addition, menu, menu_food};
use crate::domain::model::{Food, FoodAddition, Menu};

impl From<food_addition::Model> for FoodAddition {
    fn from(m: food_addition::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            price: m.price,
        }
    }
}

/// Builds foods with their additions; additions must be sorted by position.
pub fn to_foods(foods: Vec<food::Model>, additions: Vec<food_addition::Model>) -> Vec<Food> {
    let mut by_food: HashMap<Uuid, Vec<FoodAddition>> = HashMap::new();
    for addition in additions {
        by_food
            .entry(addition.food_id)
            .or_default()
            .push(addition.into());
    }

    foods
        .into_iter()
        .map(|f| Food {
            additions: by_food.remove(&f.id).unwrap_or_default(),
            id: f.id,
            name: f.name,
            price: f.price,
            description: f.description,
        })
        .collect()
}

/// Builds menus in the given order; links must be sorted by position.
/// Links to foods that no longer exist are skipped.
pub fn to_menus(menus: Vec<menu::Model>, links: &[menu_food::Model], foods: &[Food]) -> Vec<Menu> {
    let foods: HashMap<Uuid, &Food> = foods.iter().map(|f| (f.id, f)).collect();

    menus
        .into_iter()
        .map(|m| Menu {
            foods: links
                .iter()
                .filter(|l| l.menu_id == m.id)
                .filter_map(|l| foods.get(&l.food_id).map(|&f| f.clone()))
                .collect(),
            id: m.id,
            name: m.name,
        })
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn food_row(name: &str) -> food::Model {
        food::Model {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            price: Decimal::new(8, 0),
            description: String::new(),
        }
    }

    fn addition_row(food_id: Uuid, name: &str, position: i32) -> food_addition::Model {
        food_addition::Model {
            id: Uuid::new_v4(),
            food_id,
            name: name.to_owned(),
            price: Decimal::new(1, 1),
            position,
        }
    }

    #[test]
    fn additions_follow_their_food() {
        let fries = food_row("Fries");
        let soup = food_row("Soup");
        let additions = vec![
            addition_row(fries.id, "Ketchup", 0),
            addition_row(fries.id, "Mayo", 1),
        ];

        let foods = to_foods(vec![fries, soup], additions);
        let names: Vec<_> = foods[0].additions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Ketchup", "Mayo"]);
        assert!(foods[1].additions.is_empty());
    }

    #[test]
    fn menus_keep_link_order_and_skip_dangling_links() {
        let foods = to_foods(vec![food_row("Fries"), food_row("Soup")], vec![]);
        let menu = menu::Model {
            id: Uuid::new_v4(),
            name: "Lunch".to_owned(),
        };
        let link = |food_id, position| menu_food::Model {
            menu_id: menu.id,
            food_id,
            position,
        };
        let links = vec![
            link(foods[1].id, 0),
            link(Uuid::new_v4(), 1),
            link(foods[0].id, 2),
        ];

        let menus = to_menus(vec![menu], &links, &foods);
        let names: Vec<_> = menus[0].foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Fries"]);
    }
}
