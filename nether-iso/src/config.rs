//! Viewport configuration (TOML)
//!
//! Describes the screen rectangle and an optional fixed camera so tools can
//! reproduce a viewport without writing code:
//!
//! ```toml
//! [screen]
//! x = 0
//! y = 0
//! width = 800
//! height = 600
//!
//! [camera]
//! x = 160.0
//! y = 80.0
//! ```

use std::path::{Path, PathBuf};
use std::rc::Rc;

use glam::DVec2;
use nethercore_shared::constants::DEFAULT_RESOLUTION;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::camera::FixedCamera;
use crate::viewport::Viewport;

/// Errors from loading or validating a [`ViewportConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse viewport config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid screen size {width}x{height} (both dimensions must be positive)")]
    InvalidSize { width: i32, height: i32 },
}

/// Viewport configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ViewportConfig {
    /// Screen rectangle in pixels
    #[serde(default)]
    pub screen: ScreenConfig,
    /// Fixed camera position in ortho space (default: no camera)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraConfig>,
}

/// Screen rectangle section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Left edge (default: 0)
    #[serde(default)]
    pub x: i32,
    /// Top edge (default: 0)
    #[serde(default)]
    pub y: i32,
    /// Width in pixels (default: 800)
    #[serde(default = "default_width")]
    pub width: i32,
    /// Height in pixels (default: 600)
    #[serde(default = "default_height")]
    pub height: i32,
}

/// Camera section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CameraConfig {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

fn default_width() -> i32 {
    DEFAULT_RESOLUTION.0
}
fn default_height() -> i32 {
    DEFAULT_RESOLUTION.1
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: default_width(),
            height: default_height(),
        }
    }
}

/// A viewport built from config, plus the camera it is bound to.
///
/// The viewport holds the camera weakly; keep this struct (or the camera
/// `Rc`) alive for as long as the viewport is used.
#[derive(Debug)]
pub struct ConfiguredViewport {
    pub viewport: Viewport,
    pub camera: Option<Rc<FixedCamera>>,
}

impl ViewportConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check the screen size.
    ///
    /// Odd widths are accepted, but split-screen halves lose a pixel column,
    /// so a warning is logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScreenConfig { width, height, .. } = self.screen;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidSize { width, height });
        }
        if width % 2 != 0 {
            warn!(
                "screen width {} is odd; split-screen halves will be {} pixels wide",
                width,
                width / 2
            );
        }
        Ok(())
    }

    /// Build the viewport (and camera, if configured).
    pub fn build(&self) -> Result<ConfiguredViewport, ConfigError> {
        self.validate()?;

        let ScreenConfig {
            x,
            y,
            width,
            height,
        } = self.screen;
        let mut viewport = Viewport::new(x, y, width, height);

        let camera = self.camera.map(|camera| {
            let camera = Rc::new(FixedCamera::new(DVec2::new(camera.x, camera.y)));
            viewport.set_camera(&camera);
            camera
        });

        Ok(ConfiguredViewport { viewport, camera })
    }
}
