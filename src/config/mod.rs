use glam::Vec3;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::geometry::RigidTransform;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn default_frame_id() -> String {
    "odom".to_string()
}
fn default_side_length() -> f32 {
    10.0
}
fn default_top_height() -> f32 {
    1.0
}
fn default_bottom_height() -> f32 {
    0.0
}

/// Pose of the slice plane in the global frame
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct PoseConfig {
    #[serde(default)]
    pub translation: [f32; 3],
    /// Rotation about the global z axis, in degrees
    #[serde(default)]
    pub yaw_deg: f32,
}

impl PoseConfig {
    pub fn to_transform(&self) -> RigidTransform {
        RigidTransform::from_yaw_translation(
            self.yaw_deg.to_radians(),
            Vec3::from_array(self.translation),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_frame_id")]
    pub frame_id: String,
    #[serde(default = "default_side_length")]
    pub side_length: f32,
    #[serde(default = "default_top_height")]
    pub top_height: f32,
    #[serde(default = "default_bottom_height")]
    pub bottom_height: f32,
    #[serde(default)]
    pub pose: PoseConfig,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            frame_id: default_frame_id(),
            side_length: default_side_length(),
            top_height: default_top_height(),
            bottom_height: default_bottom_height(),
            pose: PoseConfig::default(),
            output: None,
        }
    }
}

impl FileConfig {
    /// Load the first parseable config file from the default search paths
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => return Some(config),
                Err(e) => warn!(error = %e, "skipping config file"),
            }
        }
        None
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("slice-markers.toml"));
    paths.push(PathBuf::from(".slice-markers.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("slice-markers").join("config.toml"));
        paths.push(config_dir.join("slice-markers.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".slice-markers.toml"));
    }

    paths
}
