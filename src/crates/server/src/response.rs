use actix_web::{http::StatusCode, HttpResponse};
use log::error;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

pub const SUCCESS: &str = "success";

/// `{type, message[, data]}` envelope of the music endpoints.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T: Serialize> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl JsonResponse<()> {
    pub fn success(message: &str) -> Self {
        Self {
            kind: SUCCESS,
            message: message.to_string(),
            data: None,
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    pub fn success_with_data(message: &str, data: T) -> Self {
        Self {
            kind: SUCCESS,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Serializes `value` with four-space indentation.
pub fn indented_json<T: Serialize>(status: StatusCode, value: &T) -> HttpResponse {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    match value.serialize(&mut ser) {
        Ok(()) => HttpResponse::build(status)
            .content_type("application/json; charset=utf-8")
            .body(buf),
        Err(e) => {
            error!("Failed to encode response: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal server error".to_string(),
            })
        }
    }
}
