use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use client_core::NOTIFICATION_DURATION;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub summarizer_url: String,
    pub weather_url: String,
    pub download_dir: PathBuf,
    pub notification_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            summarizer_url: "http://127.0.0.1:5000".into(),
            weather_url: "http://127.0.0.1:5000".into(),
            download_dir: PathBuf::from("."),
            notification_ms: NOTIFICATION_DURATION.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    summarizer_url: Option<String>,
    weather_url: Option<String>,
    download_dir: Option<PathBuf>,
    notification_ms: Option<u64>,
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// Defaults, then `path` if it exists, then environment variables. The
/// `APP__` form of a variable wins over the bare one.
pub fn load_settings_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
            if let Some(v) = file_cfg.summarizer_url {
                settings.summarizer_url = v;
            }
            if let Some(v) = file_cfg.weather_url {
                settings.weather_url = v;
            }
            if let Some(v) = file_cfg.download_dir {
                settings.download_dir = v;
            }
            if let Some(v) = file_cfg.notification_ms {
                settings.notification_ms = v;
            }
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    if let Some(v) = env("SUMMARIZER_URL") {
        settings.summarizer_url = v;
    }
    if let Some(v) = env("APP__SUMMARIZER_URL") {
        settings.summarizer_url = v;
    }

    if let Some(v) = env("WEATHER_URL") {
        settings.weather_url = v;
    }
    if let Some(v) = env("APP__WEATHER_URL") {
        settings.weather_url = v;
    }

    if let Some(v) = env("DOWNLOAD_DIR") {
        settings.download_dir = PathBuf::from(v);
    }
    if let Some(v) = env("APP__DOWNLOAD_DIR") {
        settings.download_dir = PathBuf::from(v);
    }

    if let Some(v) = env("APP__NOTIFICATION_MS") {
        settings.notification_ms = v
            .trim()
            .parse()
            .with_context(|| format!("APP__NOTIFICATION_MS must be milliseconds, got '{v}'"))?;
    }

    validate_base_url("summarizer_url", &settings.summarizer_url)?;
    validate_base_url("weather_url", &settings.weather_url)?;
    Ok(settings)
}

fn validate_base_url(key: &str, raw: &str) -> anyhow::Result<()> {
    let url = Url::parse(raw).with_context(|| format!("{key} is not a valid url: '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("{key} must be an http(s) url, got '{raw}'");
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
