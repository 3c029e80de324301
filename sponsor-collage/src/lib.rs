pub mod cli;
pub mod config;
pub mod pipeline;
pub mod sources;

pub use config::CollageConfig;
pub use pipeline::{RunSummary, run};

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}
