use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_KEY: &str = "generatedImages";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub generate_url: String,
    pub debounce_ms: u64,
    pub store_path: PathBuf,
    pub storage_key: String,
    pub image_size: u32,
    pub request_timeout_secs: u64,
    /// Largest JSON body `/input` accepts.
    pub max_input_bytes: usize,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            generate_url: "http://localhost:8000/api/generate-image".into(),
            debounce_ms: 300,
            store_path: PathBuf::from("promptgrid-storage.json"),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            image_size: 512,
            request_timeout_secs: 30,
            max_input_bytes: 10 * 1024 * 1024,
            debug: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            generate_url: env::var("GENERATE_URL").unwrap_or(defaults.generate_url),
            debounce_ms: env::var("DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.debounce_ms),
            store_path: env::var("STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            storage_key: env::var("STORAGE_KEY")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.storage_key),
            image_size: env::var("IMAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.image_size),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            max_input_bytes: env::var("MAX_INPUT_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_input_bytes),
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(defaults.debug),
        }
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
