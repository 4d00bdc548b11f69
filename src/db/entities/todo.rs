use std::cmp::Ordering;

use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[sea_orm(indexed)]
    pub priority: i32,
    #[sea_orm(default_value = false)]
    pub done: bool,
}

impl ActiveModelBehavior for ActiveModel {}

/// Listing order: higher priority first, then name in bytewise ascending
/// order.
pub fn listing_order(a: &Model, b: &Model) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.name.cmp(&b.name))
}
