//! Game settings
//!
//! Read from LocalStorage as JSON in the browser; missing fields fall back to
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::resources::ResourceConfig;
use crate::sim::OffscreenBehaviour;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name recorded with the high score
    pub player_name: String,
    /// Big asteroids spawned when a level starts
    pub starting_level: u32,
    pub starting_lives: u32,
    /// Start with the debug overlay on
    pub debug: bool,
    /// Where the Space Shooter Redux images are served from
    pub asset_prefix: String,
    /// Ship edge policy; `Die` makes the ship mortal
    pub ship_offscreen: OffscreenBehaviour,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "Player one".to_string(),
            starting_level: 1,
            starting_lives: 3,
            debug: false,
            asset_prefix: "./assets/images/SpaceShooterRedux".to_string(),
            ship_offscreen: OffscreenBehaviour::Overflow,
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "asteroids_settings";

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Images to load for these settings
    pub fn resource_config(&self) -> ResourceConfig {
        ResourceConfig::from_manifest(self.asset_prefix.clone())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.player_name, "Player one");
        assert_eq!(settings.starting_level, 1);
        assert_eq!(settings.starting_lives, 3);
        assert_eq!(settings.ship_offscreen, OffscreenBehaviour::Overflow);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"player_name": "Ada", "seed": 42}"#).unwrap();
        assert_eq!(settings.player_name, "Ada");
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.starting_lives, 3);
    }

    #[test]
    fn test_offscreen_policy_from_json() {
        let settings = Settings::from_json(r#"{"ship_offscreen": "Die"}"#).unwrap();
        assert_eq!(settings.ship_offscreen, OffscreenBehaviour::Die);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, GameError::Settings(_)));
    }

    #[test]
    fn test_resource_config_uses_prefix() {
        let settings = Settings {
            asset_prefix: "/static".to_string(),
            ..Default::default()
        };
        let config = settings.resource_config();
        assert_eq!(config.url_for("a.png"), "/static/a.png");
    }
}
