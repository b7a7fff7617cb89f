mod config;
pub mod database;

pub use config::{BackendConfig, CatalogConfig, ChartsConfig, Config, FormConfig};
pub use database::{Database, StoreStats};

use std::path::PathBuf;

/// Returns `~/.config/venturekid[-dev]/` based on VENTUREKID_ENV.
///
/// Set VENTUREKID_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("VENTUREKID_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("venturekid-dev")
    } else {
        base_dir.join("venturekid")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
