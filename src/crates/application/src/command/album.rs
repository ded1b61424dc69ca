use crate::error::AppError;
use domain::album::{Album, AlbumRepository};
use log::info;
use std::sync::Arc;

#[derive(Debug)]
pub struct AddAlbumCmd {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

#[derive(Clone)]
pub struct AlbumService {
    album_repository: Arc<dyn AlbumRepository>,
}

impl AlbumService {
    pub fn new(album_repository: Arc<dyn AlbumRepository>) -> Self {
        Self { album_repository }
    }

    // 不校验 id 唯一性，重复 id 也会追加
    pub async fn add_album(&self, cmd: AddAlbumCmd) -> Result<Album, AppError> {
        let album = Album {
            id: cmd.id,
            title: cmd.title,
            artist: cmd.artist,
            price: cmd.price,
        };
        info!("Adding album {} ({})", album.id, album.title);
        Ok(self.album_repository.append(album).await?)
    }
}
