//! Discord bot integration.
//!
//! The event handler keeps the registries in step with the guilds the bot is in and
//! passes every inbound message to the dispatch gate, which runs the matched command.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and joins, plus the channel and role cache used for
//!   permission checks
//! - `GUILD_MESSAGES` - Messages in guild channels
//! - `MESSAGE_CONTENT` - Message text for command parsing (privileged intent)
//! - `GUILD_MEMBERS` - Member cache for administrator checks (privileged intent)
//!
//! Privileged intents must be explicitly enabled in the Discord Developer Portal for
//! the bot application.

pub mod command;
pub mod context;
pub mod dispatch;
pub mod handler;
pub mod start;
