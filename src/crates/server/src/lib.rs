pub mod album_api;
pub mod ascii;
pub mod error;
pub mod music_api;
pub mod response;

#[cfg(test)]
pub(crate) mod testing;

use actix_web::web;
use application::command::album::AlbumService;
use application::command::music::MusicService;
use application::query::album::{GetAlbum, GetAlbums};
use application::query::get_music::GetMusic;
use domain::album::AlbumRepository;
use domain::music::MusicRepository;
use infra::repository::in_memory::album::InMemoryAlbumRepository;
use infra::repository::postgres::music::MusicRepositoryImpl;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct AppState {
    pub music_service: MusicService,
    pub get_music: GetMusic,
    pub album_service: AlbumService,
    pub get_albums: GetAlbums,
    pub get_album: GetAlbum,
}

impl AppState {
    /// Music backed by the Postgres pool, albums by the seeded in-memory list.
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repositories(
            Arc::new(MusicRepositoryImpl::new(db)),
            Arc::new(InMemoryAlbumRepository::seeded()),
        )
    }

    pub fn with_repositories(
        music_repository: Arc<dyn MusicRepository>,
        album_repository: Arc<dyn AlbumRepository>,
    ) -> Self {
        Self {
            music_service: MusicService::new(music_repository.clone()),
            get_music: GetMusic::new(music_repository),
            album_service: AlbumService::new(album_repository.clone()),
            get_albums: GetAlbums::new(album_repository.clone()),
            get_album: GetAlbum::new(album_repository),
        }
    }
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config());
    album_api::configure_service(cfg);
    ascii::configure_service(cfg);
    music_api::configure_service(cfg);
}
