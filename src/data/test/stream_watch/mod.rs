use crate::{
    data::stream_watch::StreamWatchRepository,
    model::stream::{CustomNotification, StreamWatch},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_guild;
mod set_online;
