use std::path::{ Path, PathBuf };

use anyhow::{ Context, Result };
use log::info;
use serde::{ Deserialize, Serialize };

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "BEDROOM_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "bedroom.json";

/// Runtime settings. Every field has a default, so a config file only needs the
/// keys it wants to change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub shaders: ShaderConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "CSE 4208: Computer Graphics Laboratory".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ShaderConfig {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("shaders/vertexShader.vs"),
            fragment: PathBuf::from("shaders/fragmentShader.fs"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub movement_speed: f32,
    /// Degrees per second for keyboard pitch / yaw / roll
    pub rotation_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
    /// Degrees per second the look-at camera circles the room in orbit view
    pub orbit_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        use crate::engine::components::camera::{ ROTATION_SPEED, SENSITIVITY, SPEED, ZOOM };
        Self {
            position: [0.0, 0.0, 3.0],
            movement_speed: SPEED,
            rotation_speed: ROTATION_SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
            orbit_speed: 20.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub clear_color: [f32; 4],
    /// Fan blade spin in degrees per second
    pub fan_speed: f32,
    pub show_axes: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: [1.0, 1.0, 1.0, 1.0],
            fan_speed: 6.0,
            show_axes: false,
        }
    }
}

impl AppConfig {
    /// Load from `$BEDROOM_CONFIG`, else `bedroom.json` if present, else defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_path(path)
                } else {
                    info!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs
            ::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
