use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::stream::StreamWatch;

pub struct StreamWatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StreamWatchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every watched stream of a guild in insertion order
    pub async fn get_by_guild(&self, guild_id: &str) -> Result<Vec<StreamWatch>, DbErr> {
        let entities = entity::prelude::StreamWatch::find()
            .filter(entity::stream_watch::Column::GuildId.eq(guild_id))
            .order_by_asc(entity::stream_watch::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StreamWatch::from_entity).collect())
    }

    /// Persists a new watched stream
    ///
    /// # Returns
    /// - `Ok(StreamWatch)` - The stored watch
    /// - `Err(DbErr)` - Database error, including a unique violation on (guild, login)
    pub async fn create(&self, watch: &StreamWatch) -> Result<StreamWatch, DbErr> {
        let entity = entity::stream_watch::ActiveModel {
            guild_id: ActiveValue::Set(watch.guild_id.clone()),
            channel_id: ActiveValue::Set(watch.channel_id.clone()),
            login: ActiveValue::Set(watch.login.clone()),
            is_online: ActiveValue::Set(watch.is_online()),
            custom_message: ActiveValue::Set(watch.custom.message.clone()),
            custom_image_url: ActiveValue::Set(watch.custom.image_url.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StreamWatch::from_entity(entity))
    }

    /// Stores the last known online flag of a watched stream
    pub async fn set_online(&self, guild_id: &str, login: &str, online: bool) -> Result<(), DbErr> {
        entity::prelude::StreamWatch::update_many()
            .filter(entity::stream_watch::Column::GuildId.eq(guild_id))
            .filter(entity::stream_watch::Column::Login.eq(login))
            .col_expr(
                entity::stream_watch::Column::IsOnline,
                Expr::value(online),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes every watch of a login in a guild
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: &str, login: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::StreamWatch::delete_many()
            .filter(entity::stream_watch::Column::GuildId.eq(guild_id))
            .filter(entity::stream_watch::Column::Login.eq(login))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
