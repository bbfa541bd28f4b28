//! SeaORM entity models for the herald store.
//!
//! One module per table, plus a `prelude` re-exporting the entity types under
//! their table names.

pub mod prelude;

pub mod bot_log;
pub mod guild_config;
pub mod stream_watch;
