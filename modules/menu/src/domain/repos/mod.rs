pub mod foods_repo;
pub mod menus_repo;

pub use foods_repo::FoodsRepository;
pub use menus_repo::MenusRepository;
