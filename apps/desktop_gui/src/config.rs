use std::{fs, path::Path};

use serde::Deserialize;
use storefront::LabelPairing;
use tracing::warn;

pub const SETTINGS_FILE: &str = "storefront.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    pub category_pairing: LabelPairing,
    pub category_labels: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: client_core::DEFAULT_CATALOG_BASE_URL.into(),
            category_pairing: LabelPairing::Positional,
            category_labels: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    category_pairing: Option<LabelPairing>,
    category_labels: Option<Vec<String>>,
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_settings(&mut settings, &raw, Path::new(SETTINGS_FILE));
    }

    if let Ok(v) = std::env::var("STOREFRONT_API_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Ok(v) = std::env::var("APP__CATEGORY_PAIRING") {
        match v.parse::<LabelPairing>() {
            Ok(pairing) => settings.category_pairing = pairing,
            Err(err) => warn!(%err, "ignoring APP__CATEGORY_PAIRING"),
        }
    }

    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str, origin: &Path) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!(path = %origin.display(), %err, "ignoring malformed settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = file_cfg.category_pairing {
        settings.category_pairing = v;
    }
    if let Some(v) = file_cfg.category_labels.filter(|labels| !labels.is_empty()) {
        settings.category_labels = Some(v);
    }
}
