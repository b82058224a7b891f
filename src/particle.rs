//! Explosion particles and the two shapes a firework can burst into.

use crate::config::Config;
use crate::random::Randomizer;
use crate::render::{Renderer, Rgb};

/// How a particle moves, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Part of a stationary silhouette.
    Static,
    /// Flies out along `angle` (degrees) and falls under gravity.
    Radial { speed: f32, angle: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplosionParticle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgb,
    pub generation: u8,
    pub motion: Motion,
}

impl ExplosionParticle {
    pub fn fixed(x: f32, y: f32, color: Rgb, generation: u8, config: &Config) -> Self {
        Self {
            x,
            y,
            size: config.base_size,
            color,
            generation,
            motion: Motion::Static,
        }
    }

    pub fn radial(
        x: f32,
        y: f32,
        speed: f32,
        angle: f32,
        color: Rgb,
        generation: u8,
        config: &Config,
    ) -> Self {
        Self {
            x,
            y,
            size: config.base_size,
            color,
            generation,
            motion: Motion::Radial { speed, angle },
        }
    }

    pub fn speed(&self) -> f32 {
        match self.motion {
            Motion::Static => 0.0,
            Motion::Radial { speed, .. } => speed,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.motion, Motion::Static)
    }

    pub fn is_dead(&self) -> bool {
        self.size <= 0.0
    }

    pub fn update(&mut self, config: &Config) {
        if let Motion::Radial { speed, angle } = &mut self.motion {
            let rad = angle.to_radians();
            self.x += *speed * rad.cos();
            self.y -= *speed * rad.sin();
            self.y += config.gravity;
            *speed = (*speed - config.speed_decay).max(0.0);
        }
        self.size = (self.size - config.size_decay).max(0.0);
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R, alpha: u8) {
        if self.is_dead() {
            return;
        }
        renderer.draw_filled_circle(self.x, self.y, self.size, self.color, alpha);
    }
}

/// Offset of the heart curve at `degrees`, y pointing up.
pub fn heart_offset(degrees: f32, scale: f32) -> (f32, f32) {
    let t = degrees.to_radians();
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    (scale * x, scale * y)
}

/// Static particles tracing an upright heart around the origin.
pub fn heart(
    origin: (f32, f32),
    color: Rgb,
    generation: u8,
    config: &Config,
) -> Vec<ExplosionParticle> {
    let scale = config.shape_scale(generation);
    (0..360)
        .step_by(config.degree_step as usize)
        .map(|t| {
            let (dx, dy) = heart_offset(t as f32, scale);
            // screen y grows downwards
            ExplosionParticle::fixed(origin.0 + dx, origin.1 - dy, color, generation, config)
        })
        .collect()
}

/// Gravity-bound particles thrown from the origin in random directions.
pub fn shower(
    origin: (f32, f32),
    color: Rgb,
    generation: u8,
    config: &Config,
    random: &mut Randomizer,
) -> Vec<ExplosionParticle> {
    (0..360)
        .step_by(config.degree_step as usize)
        .map(|_| {
            let speed = random.burst_speed();
            let angle = random.burst_angle();
            ExplosionParticle::radial(origin.0, origin.1, speed, angle, color, generation, config)
        })
        .collect()
}
