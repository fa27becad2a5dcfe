use std::f32::consts::PI;

use bevy::{
    asset::{io::Reader, Asset, AssetLoader, AsyncReadExt, LoadContext},
    prelude::*,
    reflect::TypePath,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gameplay tuning for the tank, read from `configs/tank.json`.
///
/// Every field is optional in the file; missing ones keep their default.
#[derive(Debug, Asset, TypePath, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TankConfig {
    /// Forward speed in units per second.
    pub move_speed: f32,
    /// Where the tank is placed when the game starts, in world coordinates.
    pub start_position: [f32; 2],
    pub arrival_tolerance: f32,
    /// Radians.
    pub angular_tolerance: f32,
    /// Radians per second.
    pub max_angular_velocity: f32,
    pub hit_scale: f32,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            move_speed: 225.0,
            // (100, 100) from the top-left corner of an 800x600 window
            start_position: [-300.0, 200.0],
            arrival_tolerance: 5.0,
            angular_tolerance: 0.15,
            max_angular_velocity: PI,
            hit_scale: 1.5,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidConfig {
    #[error("`{field}` must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`start_position` must be finite, got {0:?}")]
    StartPosition([f32; 2]),
}

impl TankConfig {
    /// Parses and validates a config file's contents.
    pub fn from_json(json: &str) -> Result<Self, TankConfigLoaderError> {
        let config = serde_json::from_str::<TankConfig>(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        let positive = [
            ("move_speed", self.move_speed),
            ("arrival_tolerance", self.arrival_tolerance),
            ("angular_tolerance", self.angular_tolerance),
            ("max_angular_velocity", self.max_angular_velocity),
            ("hit_scale", self.hit_scale),
        ];

        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(InvalidConfig::NotPositive { field, value });
            }
        }

        if !self.start_position.iter().all(|v| v.is_finite()) {
            return Err(InvalidConfig::StartPosition(self.start_position));
        }

        Ok(())
    }

    pub fn start_position(&self) -> Vec2 {
        Vec2::from_array(self.start_position)
    }
}

#[derive(Default)]
pub struct TankConfigLoader;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TankConfigLoaderError {
    #[error("Could not load config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid tank config: {0}")]
    Invalid(#[from] InvalidConfig),
}

impl AssetLoader for TankConfigLoader {
    type Asset = TankConfig;
    type Settings = ();
    type Error = TankConfigLoaderError;

    async fn load<'a>(
        &'a self,
        reader: &'a mut Reader<'_>,
        _settings: &'a Self::Settings,
        _load_context: &'a mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut json_str = String::new();

        reader.read_to_string(&mut json_str).await?;

        TankConfig::from_json(&json_str)
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}
