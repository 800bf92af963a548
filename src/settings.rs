//! Presentation settings
//!
//! Only affects how the scene is shown. Physics constants are compiled in
//! (see `consts`) and are not configurable.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "bouncy-ball.json";

/// Fewest segments a circle can be drawn with
pub const MIN_CIRCLE_SEGMENTS: u32 = 3;
/// Most segments a circle can be drawn with
pub const MAX_CIRCLE_SEGMENTS: u32 = 4096;

/// Window and rendering preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
    /// Append the frame rate to the window title
    pub show_fps: bool,
    /// Triangles used to tessellate the ball
    pub circle_segments: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Test Game".to_string(),
            vsync: true,
            show_fps: false,
            circle_segments: 48,
        }
    }
}

impl Settings {
    /// Load `SETTINGS_FILE` from the working directory, or defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load settings from `path`.
    ///
    /// A missing file silently yields defaults; an unreadable or malformed
    /// one yields defaults with a warning. Missing fields take their default.
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No {} found, using default settings", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings, clamping out-of-range values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.circle_segments = settings
            .circle_segments
            .clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS);
        Ok(settings)
    }

    /// Window title, with the frame rate when `show_fps` is on
    pub fn window_title(&self, fps: u32) -> String {
        if self.show_fps {
            format!("{} - {} FPS", self.title, fps)
        } else {
            self.title.clone()
        }
    }
}
