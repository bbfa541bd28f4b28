//! Herald Test Utils
//!
//! Shared testing utilities for the herald bot. This crate offers a builder pattern for
//! creating test contexts with in-memory SQLite databases, factories for inserting store
//! rows, and factories for Serenity gateway objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildConfig;
//!
//! #[tokio::test]
//! async fn test_guild_config() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildConfig)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
