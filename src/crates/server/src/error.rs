use crate::response::ErrorResponse;
use actix_web::{error::JsonPayloadError, http::StatusCode, web, HttpResponse, ResponseError};
use application::error::AppError;
use domain::album::AlbumError;
use domain::music::MusicError;
use log::{error, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body could not be decoded.
    #[error("{0}")]
    Decode(String),
    #[error(transparent)]
    App(#[from] AppError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::App(AppError::MusicError(MusicError::MissingParameter(_))) => {
                StatusCode::BAD_REQUEST
            }
            Self::App(AppError::MusicError(MusicError::NotFound(_))) => StatusCode::NOT_FOUND,
            Self::App(AppError::AlbumError(AlbumError::NotFound(_))) => StatusCode::NOT_FOUND,
            Self::App(AppError::MusicError(MusicError::DbErr(_))) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // 服务端错误不把数据库细节返回给客户端
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            "internal server error".to_string()
        } else {
            warn!("Request rejected: {}", self);
            self.to_string()
        };
        HttpResponse::build(status).json(ErrorResponse { error: message })
    }
}

/// JSON extractor config that reports malformed bodies as `{"error": ...}`.
/// The body is decoded as JSON whatever the request's content type says.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err: JsonPayloadError, _req| ApiError::Decode(err.to_string()).into())
}
