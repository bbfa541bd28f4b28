//! Database repository layer.
//!
//! Each repository wraps a borrowed connection and converts sea-orm entity models into
//! the domain models in `crate::model`, so the registries and commands never handle
//! store rows directly.

pub mod bot_log;
pub mod guild_config;
pub mod stream_watch;

#[cfg(test)]
mod test;
