use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

use crate::entities::prices;
use crate::models::price::PriceRecord;

/// Insert one submitted price row.
///
/// No uniqueness constraint applies; every submission lands as a new row.
/// Store failures propagate as `DbErr` for the error boundary to map.
pub async fn insert_price(
    db: &DatabaseConnection,
    record: &PriceRecord,
) -> Result<prices::Model, DbErr> {
    let row = prices::ActiveModel {
        metal: Set(record.metal.clone()),
        price: Set(record.price),
        currency: Set(record.currency.clone()),
        ..Default::default()
    };

    row.insert(db).await
}
