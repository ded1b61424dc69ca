use crate::error::AppError;
use domain::music::{Music, MusicRepository};
use log::info;
use std::sync::Arc;

#[derive(Clone)]
pub struct GetMusic {
    music_repository: Arc<dyn MusicRepository>,
}

impl GetMusic {
    pub fn new(music_repository: Arc<dyn MusicRepository>) -> Self {
        Self { music_repository }
    }

    pub async fn handle(&self) -> Result<Vec<Music>, AppError> {
        info!("Getting music...");
        let music = self.music_repository.list_all().await?;
        Ok(music)
    }
}
