use super::db_data::music::{ActiveModel, Column, Entity, Model};
use async_trait::async_trait;
use domain::music::{Music, MusicError, MusicRepository, NewMusic};
use log::error;
use sea_orm::sea_query::Expr;
use sea_orm::*;

pub struct MusicRepositoryImpl {
    db: DatabaseConnection,
}

impl MusicRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(op: &str, e: DbErr) -> MusicError {
    error!("music {} failed: {}", op, e);
    MusicError::DbErr(e.to_string())
}

#[async_trait]
impl MusicRepository for MusicRepositoryImpl {
    async fn create(&self, music: NewMusic) -> Result<Music, MusicError> {
        let active_model = ActiveModel {
            id: NotSet,
            music_id: Set(music.music_id().to_string()),
            music_title: Set(music.music_title().to_string()),
        };
        // INSERT ... RETURNING id
        let result = Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| db_err("insert", e))?;
        Ok(music.into_music(result.last_insert_id))
    }

    async fn update(&self, music: Music) -> Result<(), MusicError> {
        let result = Entity::update_many()
            .col_expr(Column::MusicId, Expr::value(music.music_id))
            .col_expr(Column::MusicTitle, Expr::value(music.music_title))
            .filter(Column::Id.eq(music.id))
            .exec(&self.db)
            .await
            .map_err(|e| db_err("update", e))?;

        if result.rows_affected == 0 {
            return Err(MusicError::NotFound(music.id));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Music>, MusicError> {
        let rows: Vec<Model> = Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| db_err("select", e))?;
        Ok(rows.into_iter().map(Music::from).collect())
    }
}
