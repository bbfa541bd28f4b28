//! Factory methods for creating test data.
//!
//! Each table has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::guild_config::create_guild_config(&db).await?;
//!     let stream = factory::stream_watch::StreamWatchFactory::new(&db, &guild.guild_id)
//!         .login("ninja")
//!         .online(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Create per-guild configuration rows
//! - `stream_watch` - Create watched stream rows
//! - `bot_log` - Create audit log rows
//! - `helpers` - Unique ID generation

pub mod bot_log;
pub mod guild_config;
pub mod helpers;
pub mod stream_watch;

pub use bot_log::create_log;
pub use guild_config::create_guild_config;
pub use stream_watch::create_stream_watch;
