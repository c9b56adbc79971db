use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tokio::sync::Semaphore;
use tracing::info;

use crate::api_json::handlers::{health_handler, help_handler, parse_handler};
use crate::config::{AppConfig, DiagnosticConfig};

/// Shared per-process state handed to every handler.
pub struct AppState {
    /// Bounds concurrent extractions on the blocking pool.
    pub semaphore: Arc<Semaphore>,
    pub max_upload_bytes: usize,
    pub diagnostic: Option<DiagnosticConfig>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        AppState {
            semaphore: Arc::new(Semaphore::new(config.workers.max(1))),
            max_upload_bytes: config.max_upload_bytes,
            diagnostic: config.diagnostic.clone(),
        }
    }
}

/// Route table, shared by `run_server` and the integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/parse", web::post().to(parse_handler))
        .route("/api/health", web::get().to(health_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(&config));
    info!(
        "listening on http://{} (workers: {}, upload limit: {} bytes, diagnostic: {})",
        config.bind,
        config.workers,
        config.max_upload_bytes,
        if config.diagnostic.is_some() { "on" } else { "off" }
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
