// --- Extractor de horarios: servidor HTTP ---

use schedsift::config::AppConfig;
use schedsift::{init_tracing, run_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();
    let config = AppConfig::from_env();
    run_server(config).await
}
