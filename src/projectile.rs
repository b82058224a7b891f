use crate::config::Config;
use crate::render::{OPAQUE, Renderer, Rgb};
use crate::trail::{self, TrailDot};

pub const ROCKET_COLOR: Rgb = (255, 255, 100);

/// A rocket climbing from the bottom edge until its speed runs out.
#[derive(Debug, Clone)]
pub struct AscendingProjectile {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub size: f32,
    pub color: Rgb,
    pub dots: Vec<TrailDot>,
}

impl AscendingProjectile {
    /// Starts on the bottom edge of the world.
    pub fn launch(x: f32, speed: f32, config: &Config) -> Self {
        Self {
            x,
            y: config.height,
            speed,
            size: config.base_size / 2.0,
            color: ROCKET_COLOR,
            dots: Vec::new(),
        }
    }

    pub fn update(&mut self, config: &Config) {
        self.dots
            .push(TrailDot::new(self.x, self.y, self.size, self.color));
        self.y -= self.speed;
        self.speed -= config.deceleration();
        trail::decay(&mut self.dots, config.trail_decay());
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.draw_filled_circle(self.x, self.y, self.size, self.color, OPAQUE);
        for dot in &self.dots {
            dot.render(renderer);
        }
    }

    /// True once the rocket has peaked and should burst.
    pub fn is_spent(&self) -> bool {
        self.speed <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Recorder;

    #[test]
    fn launch_sits_on_bottom_edge() {
        let config = Config::default();
        let rocket = AscendingProjectile::launch(300.0, 10.0, &config);
        assert_eq!(rocket.y, 600.0);
        assert_eq!(rocket.size, 2.5);
        assert_eq!(rocket.color, ROCKET_COLOR);
        assert!(!rocket.is_spent());
    }

    #[test]
    fn update_leaves_a_dot_and_slows_down() {
        let config = Config::default();
        let mut rocket = AscendingProjectile::launch(300.0, 10.0, &config);
        rocket.update(&config);

        assert_eq!(rocket.y, 590.0);
        assert!((rocket.speed - 9.85).abs() < 1e-5);
        assert_eq!(rocket.dots.len(), 1);
        // the snapshot was taken before the move, then decayed once
        assert_eq!(rocket.dots[0].y, 600.0);
        assert!((rocket.dots[0].size - 2.25).abs() < 1e-5);
    }

    #[test]
    fn trail_is_bounded_by_dot_lifetime() {
        let config = Config::default();
        let mut rocket = AscendingProjectile::launch(300.0, 12.0, &config);
        for _ in 0..40 {
            rocket.update(&config);
        }
        // a dot of size 2.5 losing 0.25 per tick survives 9 updates
        assert!(rocket.dots.len() <= 10);
        assert!(rocket.dots.iter().all(|d| d.size > 0.0));
    }

    #[test]
    fn speed_strictly_decreases_until_spent() {
        let config = Config::default();
        let mut rocket = AscendingProjectile::launch(100.0, 9.5, &config);
        let mut last = rocket.speed;
        while !rocket.is_spent() {
            rocket.update(&config);
            assert!(rocket.speed < last);
            last = rocket.speed;
        }
    }

    #[test]
    fn renders_itself_before_its_trail() {
        let config = Config::default();
        let mut rocket = AscendingProjectile::launch(50.0, 10.0, &config);
        rocket.update(&config);
        rocket.update(&config);

        let mut recorder = Recorder::new();
        rocket.render(&mut recorder);
        assert_eq!(recorder.calls.len(), 3);
        assert_eq!(recorder.calls[0].y, rocket.y);
        assert_eq!(recorder.calls[0].radius, 2.5);
    }
}
