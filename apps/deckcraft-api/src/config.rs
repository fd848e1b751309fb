//! Runtime configuration: CLI flags plus environment variables.
//!
//! `.env` is loaded before parsing so local development can keep its
//! settings out of the shell.

use std::path::PathBuf;

/// Deployment environment, from `APP_ENV` with `ENVIRONMENT` as a
/// fallback (default `development`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let raw = std::env::var("APP_ENV").or_else(|_| std::env::var("ENVIRONMENT"));
        match raw.as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Resolved configuration shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Upload size ceiling in bytes.
    pub max_upload_bytes: usize,
    /// Maximum number of files accepted by the batch endpoint.
    pub max_batch_files: usize,
    pub database_url: String,
    pub vespa_endpoint: String,
    pub vespa_timeout_ms: u64,
    /// Directory holding the static landing page.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let data_dir = data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("deckcraft-api");
            std::fs::create_dir_all(&data_dir).ok();
            format!("sqlite:{}/deckcraft.db?mode=rwc", data_dir.display())
        });

        let vespa_endpoint = std::env::var("VESPA_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let vespa_timeout_ms = std::env::var("VESPA_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5_000);

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Self {
            environment: Environment::from_env(),
            max_upload_bytes: deckcraft_pdf::MAX_PDF_BYTES,
            max_batch_files: 10,
            database_url,
            vespa_endpoint,
            vespa_timeout_ms,
            static_dir,
        }
    }
}

/// Platform data directory used for the default SQLite path.
fn data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join("Library/Application Support"))
    }
    #[cfg(target_os = "linux")]
    {
        std::env::var("XDG_DATA_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|h| PathBuf::from(h).join(".local/share"))
            })
    }
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA").ok().map(PathBuf::from)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test for all the environment-variable cases; splitting them
    // up would race on the shared process environment.
    #[test]
    fn environment_reads_app_env_then_environment() {
        std::env::remove_var("APP_ENV");
        std::env::remove_var("ENVIRONMENT");
        assert_eq!(Environment::from_env(), Environment::Development);

        std::env::set_var("ENVIRONMENT", "production");
        assert_eq!(Environment::from_env(), Environment::Production);

        // APP_ENV wins over ENVIRONMENT.
        std::env::set_var("APP_ENV", "development");
        assert_eq!(Environment::from_env(), Environment::Development);

        std::env::set_var("APP_ENV", "production");
        assert_eq!(Environment::from_env(), Environment::Production);

        std::env::remove_var("APP_ENV");
        std::env::remove_var("ENVIRONMENT");
    }
}
