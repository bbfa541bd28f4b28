//! Audit log factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an audit log row with an explicit timestamp.
///
/// # Arguments
/// - `db` - Database connection
/// - `module` - Module name recorded on the row
/// - `text` - Log text
/// - `created_at` - Timestamp to record
pub async fn create_log_at(
    db: &DatabaseConnection,
    module: &str,
    text: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::bot_log::Model, DbErr> {
    entity::bot_log::ActiveModel {
        created_at: ActiveValue::Set(created_at),
        module: ActiveValue::Set(module.to_string()),
        guild_id: ActiveValue::Set(None),
        text: ActiveValue::Set(text.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts an audit log row stamped with the current time.
pub async fn create_log(
    db: &DatabaseConnection,
    module: &str,
    text: &str,
) -> Result<entity::bot_log::Model, DbErr> {
    create_log_at(db, module, text, Utc::now()).await
}
