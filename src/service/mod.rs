//! Service layer.
//!
//! Holds the in-memory registries that sit in front of the store, the adapters for the
//! two external collaborators (Discord and Twitch) and the presence watcher that
//! combines them.

pub mod gateway;
pub mod guild_registry;
pub mod presence;
pub mod stats;
pub mod stream_registry;
pub mod twitch;

#[cfg(test)]
pub mod fake;
