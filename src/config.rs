//! Tunables for the display.
//!
//! Every field has the reference default, so a JSON file only needs to name
//! the values it changes. Call [`Config::validate`] (or use
//! [`Config::from_json_file`], which does it for you) before handing a config
//! to the [`World`](crate::World).

use crate::error::ConfigError;
use crate::render::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logical world width; the canvas scales it to the terminal.
    pub width: f32,
    pub height: f32,
    /// Ticks per second.
    pub tick_rate: u32,
    pub background: Rgb,

    /// Starting size of an explosion particle. Rockets are half of it.
    pub base_size: f32,
    pub heart_scale: f32,
    pub radial_scale: f32,
    pub size_decay: f32,
    pub speed_decay: f32,
    pub gravity: f32,
    /// Angular spacing of the shape generators, in degrees.
    pub degree_step: u32,
    pub fade_rate: f32,
    /// Depth of explosions: 1 = hearts only, 2 = hearts shed a shower.
    pub generation_cap: u8,

    /// Ticks between launch batches.
    pub launch_interval: u32,
    pub launch_count_min: u32,
    pub launch_count_max: u32,
    pub launch_speed_min: f32,
    pub launch_speed_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            tick_rate: 60,
            background: (0, 0, 0),
            base_size: 5.0,
            heart_scale: 10.0,
            radial_scale: 5.0,
            size_decay: 0.05,
            speed_decay: 0.07,
            gravity: 1.5,
            degree_step: 1,
            fade_rate: 3.0,
            generation_cap: 2,
            launch_interval: 100,
            launch_count_min: 1,
            launch_count_max: 3,
            launch_speed_min: 8.0,
            launch_speed_max: 12.0,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // `!(x > 0)` also rejects NaN
    if !(value > 0.0) {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn ordered(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::EmptyRange { field, min, max });
    }
    Ok(())
}

impl Config {
    /// Loads a JSON config file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would stall the simulation or let pools grow
    /// without bound (any decay that never reaches zero).
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("width", self.width as f64)?;
        positive("height", self.height as f64)?;
        positive("tick_rate", self.tick_rate as f64)?;
        positive("base_size", self.base_size as f64)?;
        positive("heart_scale", self.heart_scale as f64)?;
        positive("radial_scale", self.radial_scale as f64)?;
        positive("size_decay", self.size_decay as f64)?;
        positive("speed_decay", self.speed_decay as f64)?;
        positive("gravity", self.gravity as f64)?;
        positive("fade_rate", self.fade_rate as f64)?;
        positive("generation_cap", self.generation_cap as f64)?;
        positive("launch_interval", self.launch_interval as f64)?;
        positive("launch_count_min", self.launch_count_min as f64)?;
        positive("launch_speed_min", self.launch_speed_min as f64)?;
        ordered(
            "launch_count",
            self.launch_count_min as f64,
            self.launch_count_max as f64,
        )?;
        ordered(
            "launch_speed",
            self.launch_speed_min as f64,
            self.launch_speed_max as f64,
        )?;
        if self.degree_step == 0 || self.degree_step > 360 {
            return Err(ConfigError::DegreeStep(self.degree_step));
        }
        Ok(())
    }

    /// Tick on which a firework sheds its next generation.
    pub fn spawn_tick(&self) -> u32 {
        self.tick_rate / 2
    }

    /// Speed a rocket loses every tick.
    pub fn deceleration(&self) -> f32 {
        self.gravity * 0.1
    }

    pub fn trail_decay(&self) -> f32 {
        self.size_decay * 5.0
    }

    /// Heart scale for the first generation, the smaller radial scale after.
    pub fn shape_scale(&self, generation: u8) -> f32 {
        if generation <= 1 {
            self.heart_scale
        } else {
            self.radial_scale
        }
    }

    /// Number of particles one shape generator produces.
    pub fn particles_per_shape(&self) -> usize {
        (0..360).step_by(self.degree_step.max(1) as usize).count()
    }
}
