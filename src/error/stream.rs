use sea_orm::DbErr;
use thiserror::Error;

use crate::error::twitch::TwitchError;

/// Failures adding or removing watched streams.
#[derive(Error, Debug)]
pub enum StreamError {
    /// The login is already watched in this guild.
    #[error("Stream {login} is already watched in guild {guild_id}")]
    AlreadyExists { guild_id: String, login: String },

    /// No watch exists for the login in this guild.
    #[error("Stream {login} is not watched in guild {guild_id}")]
    NotFound { guild_id: String, login: String },

    /// The streaming service has no account with this login.
    #[error("Twitch user {0} does not exist")]
    UnknownLogin(String),

    /// The streaming service lookup failed.
    #[error(transparent)]
    ExternalService(#[from] TwitchError),

    /// The store rejected the change; the in-memory indexes were left untouched.
    #[error(transparent)]
    Persistence(#[from] DbErr),
}
