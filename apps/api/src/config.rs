use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default — the service runs with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the storage blobs (`career_roadmaps.json` etc.).
    pub data_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Default tracing filter directive scoped to this crate. Tracing targets
    /// carry the underscored form of the package name, not the hyphenated one.
    pub fn log_directive(&self) -> String {
        format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            self.rust_log
        )
    }
}
