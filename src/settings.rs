//! Game settings
//!
//! Read from an optional JSON file; anything missing or unreadable falls
//! back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Enemy speed multiplier on touch devices
pub const TOUCH_ENEMY_SPEED_SCALE: f32 = 0.85;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Slows enemies down for on-screen controls
    pub touch_controls: bool,
    /// Where the high-score table is kept
    pub records_path: PathBuf,
    /// Frames the headless driver runs for
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            touch_controls: false,
            records_path: PathBuf::from("bubble_pop_records.json"),
            demo_frames: 3600,
        }
    }
}

impl Settings {
    pub fn enemy_speed_scale(&self) -> f32 {
        if self.touch_controls {
            TOUCH_ENEMY_SPEED_SCALE
        } else {
            1.0
        }
    }

    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`, using defaults if it can't be read
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::info!("Using default settings ({:?}: {})", path, e);
                return Self::default();
            }
        };
        match Self::from_json(&contents) {
            Ok(settings) => {
                log::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse settings {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }
}
