use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::menu_food::Entity")]
    MenuFood,
}

impl Related<super::menu_food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuFood.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
