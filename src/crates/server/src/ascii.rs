use crate::response::ErrorResponse;
use actix_web::{web, HttpResponse};
use log::error;
use serde::Serialize;
use serde_json::json;

/// Serializes `value` as JSON that only contains ASCII.
///
/// Every code point above U+007F becomes a `\uXXXX` escape (lowercase hex,
/// surrogate pairs outside the BMP); `<`, `>` and `&` are escaped as well.
pub fn to_ascii_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let raw = serde_json::to_string(value)?;
    let mut out = String::with_capacity(raw.len());
    let mut units = [0u16; 2];
    for c in raw.chars() {
        match c {
            '<' | '>' | '&' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c if c.is_ascii() => out.push(c),
            c => {
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    Ok(out)
}

pub async fn ascii_json() -> HttpResponse {
    let data = json!({
        "lang": "GO语言",
        "tag": "<br>",
    });

    match to_ascii_json(&data) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(e) => {
            error!("Failed to encode ascii json: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal server error".to_string(),
            })
        }
    }
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.route("/ascii", web::get().to(ascii_json));
}
