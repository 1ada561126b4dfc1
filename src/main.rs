use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;

mod api;
mod attendance;
mod config;
mod directory;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod utils;

use attendance::clock::SystemClock;
use attendance::manager::ClockSessionManager;
use attendance::session_store::FileSessionStore;
use attendance::submitter::{SheetSubmitter, install_crypto_provider};
use config::Config;
use directory::init_directory;

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "HRM dashboard is running"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    install_crypto_provider();

    let directory = Data::new(
        init_directory(&config.data_dir).context("failed to load directory snapshot")?,
    );

    // Loads any session left open by a previous run before the first request
    let manager = Data::new(ClockSessionManager::new(
        Arc::new(FileSessionStore::new(&config.session_file)),
        Arc::new(SheetSubmitter::new(
            &config.submission_url,
            config.submission_timeout,
        )),
        Arc::new(SystemClock),
    ));

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(directory.clone())
            .app_data(manager.clone())
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config_data))
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
