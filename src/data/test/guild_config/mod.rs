use crate::{
    data::guild_config::GuildConfigRepository,
    model::guild::{GuildDefaults, GuildRecord, GuildSetting},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_guild_id;
mod update_setting;
