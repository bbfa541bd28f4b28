//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and command handlers. It
//! wraps the domain-specific errors of each subsystem so they convert with `?`.

pub mod config;
pub mod gateway;
pub mod guild;
pub mod internal;
pub mod stream;
pub mod twitch;

use thiserror::Error;

use crate::error::{
    config::ConfigError, gateway::GatewayError, guild::GuildSettingError,
    internal::InternalError, stream::StreamError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// A guild setting could not be parsed or persisted.
    #[error(transparent)]
    GuildSettingErr(#[from] GuildSettingError),

    /// A stream watch could not be added or removed.
    #[error(transparent)]
    StreamErr(#[from] StreamError),

    /// The messaging gateway rejected or failed a request.
    #[error(transparent)]
    GatewayErr(#[from] GatewayError),

    /// Unexpected internal state, usually a malformed identifier.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
