use std::{fs, path::Path};

use anyhow::Context;
use client_core::{
    backend::normalize_base_url,
    controller::{DEFAULT_PLACE_TYPE, DEFAULT_RADIUS_KM},
    ControllerConfig,
};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "travel_finder.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub default_radius_km: u32,
    pub default_place_type: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5001".into(),
            default_radius_km: DEFAULT_RADIUS_KM,
            default_place_type: DEFAULT_PLACE_TYPE.into(),
        }
    }
}

impl Settings {
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            default_radius_km: self.default_radius_km,
            default_place_type: self.default_place_type.clone(),
            ..ControllerConfig::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    default_radius_km: Option<u32>,
    default_place_type: Option<String>,
}

/// Defaults, then the config file if present, then environment variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    normalize_base_url(&settings.server_url)?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.default_radius_km {
        settings.default_radius_km = v;
    }
    if let Some(v) = file_cfg.default_place_type {
        settings.default_place_type = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("FINDER_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = lookup("FINDER_DEFAULT_RADIUS_KM") {
        match v.parse::<u32>() {
            Ok(parsed) => settings.default_radius_km = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring non-numeric FINDER_DEFAULT_RADIUS_KM"),
        }
    }

    if let Some(v) = lookup("FINDER_DEFAULT_PLACE_TYPE") {
        settings.default_place_type = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
