use crate::error::ApiError;
use crate::response::JsonResponse;
use crate::AppState;
use actix_web::{web, web::Json, HttpResponse};
use application::command::music::{CreateMusicCmd, UpdateMusicCmd};
use domain::music::Music;
use serde::{Deserialize, Serialize};

const MSG_INSERTED: &str = "The music has been inserted successfully!";
const MSG_UPDATED: &str = "The music has been updated successfully!";
const MSG_LISTED: &str = "Get music successfully!";

// 缺失的 music_id/music_title 按空字符串处理，交给校验器给出具体的字段名；id 必填
#[derive(Debug, Deserialize)]
pub struct CreateMusicRequest {
    #[serde(default)]
    pub music_id: String,
    #[serde(default)]
    pub music_title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMusicRequest {
    pub id: i32,
    #[serde(default)]
    pub music_id: String,
    #[serde(default)]
    pub music_title: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MusicDto {
    pub id: i32,
    pub music_id: String,
    pub music_title: String,
}

impl From<Music> for MusicDto {
    fn from(music: Music) -> Self {
        Self {
            id: music.id,
            music_id: music.music_id,
            music_title: music.music_title,
        }
    }
}

pub async fn create_music(
    state: web::Data<AppState>,
    Json(req): Json<CreateMusicRequest>,
) -> Result<HttpResponse, ApiError> {
    let music = state
        .music_service
        .create_music(CreateMusicCmd {
            music_id: req.music_id,
            music_title: req.music_title,
        })
        .await?;
    Ok(HttpResponse::Created().json(JsonResponse::success_with_data(
        MSG_INSERTED,
        MusicDto::from(music),
    )))
}

pub async fn edit_music(
    state: web::Data<AppState>,
    Json(req): Json<UpdateMusicRequest>,
) -> Result<HttpResponse, ApiError> {
    state
        .music_service
        .update_music(UpdateMusicCmd {
            id: req.id,
            music_id: req.music_id,
            music_title: req.music_title,
        })
        .await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success(MSG_UPDATED)))
}

pub async fn get_music(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let music: Vec<MusicDto> = state
        .get_music
        .handle()
        .await?
        .into_iter()
        .map(MusicDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(JsonResponse::success_with_data(MSG_LISTED, music)))
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.route("/add_music", web::post().to(create_music))
        .route("/update_music", web::post().to(edit_music))
        .route("/get_music", web::get().to(get_music));
}
