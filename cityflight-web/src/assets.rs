use cityflight_core::AssetStatus;
use macroquad::prelude::*;

use crate::log::log_warn;

/// Optional text asset. A missing or unreadable file is reported once and not retried.
pub async fn load_optional_string(path: &str) -> AssetStatus<String> {
    match load_string(path).await {
        Ok(text) => AssetStatus::Loaded(text),
        Err(err) => {
            log_warn(&format!("{path} unavailable: {err}"));
            AssetStatus::Unavailable
        }
    }
}

pub async fn load_optional_texture(path: &str) -> AssetStatus<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Linear);
            AssetStatus::Loaded(texture)
        }
        Err(err) => {
            log_warn(&format!("{path} unavailable: {err}"));
            AssetStatus::Unavailable
        }
    }
}
