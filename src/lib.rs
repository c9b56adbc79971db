// Biblioteca raíz del crate `schedsift`.
// Extrae horarios por sección desde planillas de horario universitarias.

pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod excel;
pub mod models;
pub mod server;

pub use algorithm::extract_timetable;
pub use error::{ExtractError, Result};
pub use server::run_server;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "schedsift=info,actix_web=info";

/// Instala el subscriber global de `tracing`; `RUST_LOG` reemplaza el filtro por defecto.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
