use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use infra::config::AppConfigImpl;
use log::{error, info};
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::io;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {m}{n}";

// 日志同时输出到控制台和文件
fn init_logging() -> io::Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build("jukebox.log")?;
    let console_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .appender(Appender::builder().build("stdout", Box::new(console_appender)))
        .build(
            Root::builder()
                .appender("file")
                .appender("stdout")
                .build(log_level.parse().unwrap_or(log::LevelFilter::Info)),
        )
        .map_err(io::Error::other)?;

    log4rs::init_config(config).map_err(io::Error::other)?;
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging()?;

    let cfg = AppConfigImpl::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        io::Error::other(e)
    })?;
    let server_cfg = cfg.server();
    let db = infra::db::connect(&cfg.database()).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        io::Error::other(e)
    })?;

    let app_state = web::Data::new(server::AppState::new(db));
    info!("Listening on {}:{}", server_cfg.host, server_cfg.port);
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(server::configure_service)
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}
