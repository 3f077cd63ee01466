//! SeaORM Entity for submitted metal prices.
//!
//! Rows are append-only; there is no update or delete path.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Metal symbol as submitted (e.g. "XAU")
    pub metal: String,
    /// Spot price in units of `currency`
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    /// 3-letter currency code, stored as given
    pub currency: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
