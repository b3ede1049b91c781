//! Configuration system
//!
//! Window size, look sensitivity, movement speed and the rest of the tunables
//! are compile-time configuration: `resources/config.toml` is embedded into
//! the binary and parsed once at startup. Nothing is read from disk at run
//! time.

use serde::{Deserialize, Serialize};

/// Configuration shipped with the binary
const EMBEDDED_CONFIG: &str = include_str!("../../../../resources/config.toml");

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value is outside its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window width in pixels
    pub window_width: u32,

    /// Window height in pixels
    pub window_height: u32,

    /// Window title
    pub title: String,

    /// Radians of look rotation per pixel of cursor movement
    pub look_sensitivity: f64,

    /// Player movement speed in units per second
    pub move_speed: f64,

    /// Vertical field of view in degrees
    pub fov_degrees: f64,

    /// Base name of the `.vert`/`.frag` pair under `resources/shaders/`
    pub shader_name: String,

    /// Framebuffer clear color (RGBA)
    pub clear_color: [f32; 4],

    /// Point light color
    pub light_color: [f64; 3],

    /// Cube surface color
    pub object_color: [f64; 3],

    /// Cubes per axis on each side of the origin
    pub grid_half_extent: i32,

    /// Distance between neighbouring cubes
    pub grid_spacing: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            title: "biomequest".to_string(),
            look_sensitivity: 0.005,
            move_speed: 5.0,
            fov_degrees: 70.0,
            shader_name: "lit".to_string(),
            clear_color: [0.0, 0.0, 0.2, 1.0],
            light_color: [1.0, 1.0, 1.0],
            object_color: [1.0, 0.2, 0.2],
            grid_half_extent: 2,
            grid_spacing: 2.0,
        }
    }
}

impl EngineConfig {
    /// Parse and validate the configuration embedded at build time
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Parse and validate a TOML document; missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration back to TOML, used for startup diagnostics
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if !self.look_sensitivity.is_finite() || !self.move_speed.is_finite() {
            return Err(ConfigError::Invalid(
                "look_sensitivity and move_speed must be finite".to_string(),
            ));
        }
        if self.grid_half_extent < 0 {
            return Err(ConfigError::Invalid(format!(
                "grid_half_extent must not be negative, got {}",
                self.grid_half_extent
            )));
        }
        if self.shader_name.is_empty() {
            return Err(ConfigError::Invalid("shader_name is empty".to_string()));
        }
        Ok(())
    }
}
