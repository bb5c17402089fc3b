use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::{env, fs};

/// Pause between a successful registration and navigation to the
/// attendance page.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;
/// Pause between a failed member lookup and surfacing the registration
/// offer.
pub const DEFAULT_PROMPT_DELAY_MS: u64 = 1000;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub api_base_url: String,
    pub redirect_delay_ms: u64,
    pub prompt_delay_ms: u64,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name =
                env::var("PROJECT_NAME").unwrap_or_else(|_| "club-attendance".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/app.log".into());
            let api_base_url =
                env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
            let redirect_delay_ms = env::var("REDIRECT_DELAY_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(DEFAULT_REDIRECT_DELAY_MS);
            let prompt_delay_ms = env::var("PROMPT_DELAY_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(DEFAULT_PROMPT_DELAY_MS);

            if let Some(parent) = std::path::Path::new(&log_file).parent() {
                fs::create_dir_all(parent).expect("Failed to create log directory");
            }

            Config {
                project_name,
                log_level,
                log_file,
                api_base_url,
                redirect_delay_ms,
                prompt_delay_ms,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }
}
