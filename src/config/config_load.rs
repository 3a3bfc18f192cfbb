// src/config/config_load.rs
//
// loading to config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub sprite: SpriteConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub texture_root: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct SpriteConfig {
    pub frames_per_second: f64,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub character: String,
    pub idle_animation: String,
    pub transition_start: String,
    pub transition_loop: String,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    pub fn resolve_texture_root(&self) -> PathBuf {
        if Path::new(&self.paths.texture_root).is_absolute() {
            PathBuf::from(&self.paths.texture_root)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            {
                exe_dir.join(&self.paths.texture_root)
            } else {
                PathBuf::from(&self.paths.texture_root)
            }
        }
    }

    pub fn time_per_frame(&self) -> f64 {
        1.0 / self.sprite.frames_per_second
    }
}
