use crate::error::AppError;
use domain::album::{Album, AlbumError, AlbumRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct GetAlbums {
    album_repository: Arc<dyn AlbumRepository>,
}

impl GetAlbums {
    pub fn new(album_repository: Arc<dyn AlbumRepository>) -> Self {
        Self { album_repository }
    }

    pub async fn handle(&self) -> Result<Vec<Album>, AppError> {
        Ok(self.album_repository.list().await?)
    }
}

#[derive(Clone)]
pub struct GetAlbum {
    album_repository: Arc<dyn AlbumRepository>,
}

impl GetAlbum {
    pub fn new(album_repository: Arc<dyn AlbumRepository>) -> Self {
        Self { album_repository }
    }

    pub async fn handle(&self, id: &str) -> Result<Album, AppError> {
        self.album_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AlbumError::NotFound(id.to_string()).into())
    }
}
