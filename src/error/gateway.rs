use serenity::all::Permissions;
use std::time::Duration;
use thiserror::Error;

use crate::error::internal::InternalError;

/// Failures reported by the messaging gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The bot lacks permissions it needs in the target channel.
    #[error("Missing channel permissions: {missing:?}")]
    PermissionDenied { missing: Permissions },

    /// The gateway cache has not received the object yet.
    #[error("{kind} {id} is not in the gateway cache")]
    NotCached { kind: &'static str, id: String },

    /// The request did not complete within the gateway timeout.
    #[error("Gateway request timed out after {0:?}")]
    Timeout(Duration),

    /// Discord API error from Serenity.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// A channel, guild or user ID could not be parsed.
    #[error(transparent)]
    InvalidId(#[from] InternalError),
}

impl From<serenity::Error> for GatewayError {
    fn from(err: serenity::Error) -> Self {
        GatewayError::Discord(Box::new(err))
    }
}
