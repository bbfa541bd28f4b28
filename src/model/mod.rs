//! Domain models shared by the registries, the commands and the data layer.
//!
//! Repositories convert sea-orm entity models into these types so the rest of the
//! bot never handles store rows directly.

pub mod guild;
pub mod log;
pub mod message;
pub mod notification;
pub mod stream;
pub mod twitch;
