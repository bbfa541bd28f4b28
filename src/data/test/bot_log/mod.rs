use crate::data::bot_log::BotLogRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_recent;
