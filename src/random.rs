use crate::config::Config;
use crate::render::Rgb;
use std::ops::RangeInclusive;

/// Speed band for secondary shower particles.
pub const BURST_SPEED: RangeInclusive<f32> = 2.0..=6.0;

/// Source of every random quantity the display needs.
pub struct Randomizer {
    rng: fastrand::Rng,
}

impl Randomizer {
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    pub fn from_rng(rng: fastrand::Rng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn uniform(&mut self, range: RangeInclusive<f32>) -> f32 {
        range.start() + self.rng.f32() * (range.end() - range.start())
    }

    /// Three bright channels (128..=255) in shuffled order.
    pub fn color(&mut self) -> Rgb {
        let mut channels = [
            self.rng.u8(128..=255),
            self.rng.u8(128..=255),
            self.rng.u8(128..=255),
        ];
        self.rng.shuffle(&mut channels);
        (channels[0], channels[1], channels[2])
    }

    /// Rockets in one launch batch.
    pub fn launch_count(&mut self, config: &Config) -> u32 {
        self.rng
            .u32(config.launch_count_min..=config.launch_count_max)
    }

    pub fn launch_speed(&mut self, config: &Config) -> f32 {
        self.uniform(config.launch_speed_min..=config.launch_speed_max)
    }

    /// Whole-unit launch column, kept off the outer fifths of the screen.
    pub fn launch_x(&mut self, config: &Config) -> f32 {
        let lo = (config.width * 0.2) as u32;
        let hi = ((config.width * 0.8) as u32).max(lo);
        self.rng.u32(lo..=hi) as f32
    }

    pub fn burst_speed(&mut self) -> f32 {
        self.uniform(BURST_SPEED)
    }

    /// Degrees in `[0, 360)`.
    pub fn burst_angle(&mut self) -> f32 {
        self.rng.f32() * 360.0
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}
