// init_config.rs
// Handles loading and parsing the optional session configuration from
// session.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config;
use crate::system::Viewport;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub viewport: Option<ViewportConfig>,
    /// Optional override for the charge display extent.
    pub extent: Option<f32>,
    /// Optional RNG seed for reproducible spawns.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ViewportConfig {
    /// Optional viewport width. Falls back to the default when omitted.
    pub width: Option<f32>,
    /// Optional viewport height. Falls back to the default when omitted.
    pub height: Option<f32>,
}

impl SessionConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: SessionConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Viewport with defaults filled in for omitted values.
    pub fn viewport(&self) -> Viewport {
        match &self.viewport {
            Some(v) => Viewport {
                width: v.width.unwrap_or(config::DEFAULT_VIEWPORT_WIDTH),
                height: v.height.unwrap_or(config::DEFAULT_VIEWPORT_HEIGHT),
            },
            None => Viewport::default(),
        }
    }

    pub fn extent(&self) -> f32 {
        self.extent.unwrap_or(config::DEFAULT_EXTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionConfig;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: SessionConfig = toml::from_str("").unwrap();
        let viewport = cfg.viewport();
        assert_eq!(viewport.width, 600.0);
        assert_eq!(viewport.height, 400.0);
        assert_eq!(cfg.extent(), 40.0);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn partial_viewport_keeps_the_other_default() {
        let cfg: SessionConfig = toml::from_str(
            "seed = 7\n\n[viewport]\nwidth = 800.0\n",
        )
        .unwrap();
        let viewport = cfg.viewport();
        assert_eq!(viewport.width, 800.0);
        assert_eq!(viewport.height, 400.0);
        assert_eq!(cfg.seed, Some(7));
    }
}
