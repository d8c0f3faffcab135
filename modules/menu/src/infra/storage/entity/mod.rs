pub mod food;
pub mod food_addition;
pub mod menu;
pub mod menu_food;
pub mod order;
pub mod order_item;
pub mod order_item_addition;
