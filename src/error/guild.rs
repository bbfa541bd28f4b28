use sea_orm::DbErr;
use thiserror::Error;

/// Failures changing a guild setting.
#[derive(Error, Debug)]
pub enum GuildSettingError {
    /// The setting key is not one of the known `section.key` names.
    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),

    /// The value cannot be converted for the setting.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// The in-memory record was updated but the store write failed.
    #[error(transparent)]
    Persistence(#[from] DbErr),
}
