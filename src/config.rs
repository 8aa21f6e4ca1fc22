//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera placement
    #[serde(default)]
    pub camera: CameraConfig,
    /// Projection parameters
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Points to probe and the ground plane
    #[serde(default)]
    pub probe: ProbeConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GM_PROJECTION__FOV=75 -> projection.fov = 75
        figment = figment.merge(Env::prefixed("GM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Position [x, y, z]
    pub position: [f32; 3],
    /// Rotation [pitch, yaw, roll] in degrees
    pub rotation: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 2.0, 5.0],
            rotation: [-15.0, 0.0, 0.0],
        }
    }
}

/// Kind of projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    #[default]
    Perspective,
    Orthographic,
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Perspective or orthographic
    pub kind: ProjectionKind,
    /// Vertical field of view in degrees (perspective)
    pub fov: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Height of the view volume (orthographic)
    pub ortho_height: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            kind: ProjectionKind::Perspective,
            fov: 60.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            ortho_height: 10.0,
        }
    }
}

/// Probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// World-space points in vector text form, e.g. `"1/0/-3"`
    pub points: Vec<String>,
    /// Separator used in `points`
    pub separator: String,
    /// Ground plane coefficients [a, b, c, d] of `a*x + b*y + c*z = d`
    pub ground: [f32; 4],
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            points: vec![
                "0/0/0".to_string(),
                "2/0.5/-4".to_string(),
                "0/1/20".to_string(),
            ],
            separator: gamemath_math::DEFAULT_SEPARATOR.to_string(),
            ground: [0.0, 1.0, 0.0, 0.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
