//! Global portal configuration.
//!
//! `Config` is a lazily initialized singleton populated from `.env` and the
//! process environment. Every key has a default so the portal can run without
//! any environment file at all.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::{env, fs};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    /// Path of the JSON file backing the key-value store.
    pub store_path: String,
    /// Seconds before a displayed attendance token is rotated.
    pub rotation_seconds: u64,
    /// Artificial delay applied to the stubbed login, in milliseconds.
    pub login_latency_ms: u64,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name =
                env::var("PROJECT_NAME").unwrap_or_else(|_| "club-portal".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/portal.log".into());
            let store_path =
                env::var("STORE_PATH").unwrap_or_else(|_| "data/portal-store.json".into());
            let rotation_seconds = env::var("ROTATION_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            let login_latency_ms = env::var("LOGIN_LATENCY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(500);

            if let Some(parent) = std::path::Path::new(&log_file).parent() {
                fs::create_dir_all(parent).expect("Failed to create log directory");
            }

            Config {
                project_name,
                log_level,
                log_file,
                store_path,
                rotation_seconds,
                login_latency_ms,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }

    /// Reads the store path straight from the environment, falling back to the
    /// default. Usable before (or without) `init`.
    pub fn store_path_from_env() -> String {
        env::var("STORE_PATH").unwrap_or_else(|_| "data/portal-store.json".into())
    }
}
