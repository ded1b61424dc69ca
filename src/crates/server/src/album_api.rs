use crate::error::ApiError;
use crate::response::{indented_json, MessageResponse};
use crate::AppState;
use actix_web::{http::StatusCode, web, web::Json, HttpResponse};
use application::command::album::AddAlbumCmd;
use application::error::AppError;
use domain::album::{Album, AlbumError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumDto {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<Album> for AlbumDto {
    fn from(album: Album) -> Self {
        Self {
            id: album.id,
            title: album.title,
            artist: album.artist,
            price: album.price,
        }
    }
}

pub async fn get_albums(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let albums: Vec<AlbumDto> = state
        .get_albums
        .handle()
        .await?
        .into_iter()
        .map(AlbumDto::from)
        .collect();
    Ok(indented_json(StatusCode::OK, &albums))
}

pub async fn post_albums(
    state: web::Data<AppState>,
    Json(req): Json<AlbumDto>,
) -> Result<HttpResponse, ApiError> {
    let album = state
        .album_service
        .add_album(AddAlbumCmd {
            id: req.id,
            title: req.title,
            artist: req.artist,
            price: req.price,
        })
        .await?;
    Ok(indented_json(StatusCode::CREATED, &AlbumDto::from(album)))
}

pub async fn get_album_by_id(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match state.get_album.handle(&id).await {
        Ok(album) => Ok(indented_json(StatusCode::OK, &AlbumDto::from(album))),
        Err(AppError::AlbumError(AlbumError::NotFound(_))) => Ok(indented_json(
            StatusCode::NOT_FOUND,
            &MessageResponse {
                message: "album not found".to_string(),
            },
        )),
        Err(e) => Err(e.into()),
    }
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.route("/get_albums", web::get().to(get_albums))
        .route("/post_albums", web::post().to(post_albums))
        .route("/albums/{id}", web::get().to(get_album_by_id));
}
