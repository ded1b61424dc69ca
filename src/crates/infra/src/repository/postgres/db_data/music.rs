//! `SeaORM` Entity for the music.music table

use domain::music::Music;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(schema_name = "music", table_name = "music")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "musicid")]
    pub music_id: String,
    #[sea_orm(column_name = "musictitle")]
    pub music_title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Music {
    fn from(model: Model) -> Self {
        Music {
            id: model.id,
            music_id: model.music_id,
            music_title: model.music_title,
        }
    }
}
