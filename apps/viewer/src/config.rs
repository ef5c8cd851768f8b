use std::fs;

use serde::Deserialize;

/// Where the viewer finds the chains API and how long it waits per request.
#[derive(Debug)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".into(),
            request_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    request_timeout_seconds: Option<u64>,
}

/// Defaults, then `viewer.toml` in the working directory, then environment
/// overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("viewer.toml") {
        apply_file_settings(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("THAQALAYN_API_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__REQUEST_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_seconds = parsed;
        }
    }

    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_seconds {
        settings.request_timeout_seconds = v;
    }
}
