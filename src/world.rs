//! Owns every live entity and advances them one tick at a time.

use crate::config::Config;
use crate::error::ConfigError;
use crate::firework::{Firework, Shape};
use crate::particle::ExplosionParticle;
use crate::projectile::AscendingProjectile;
use crate::random::Randomizer;
use crate::render::{OPAQUE, Renderer};
use crate::scheduler::Scheduler;
use tracing::{debug, trace};

/// What happened during one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Rockets launched by the scheduler (0 when no batch was due).
    pub launched: u32,
    /// Rockets that burst into fireworks.
    pub exploded: u32,
    /// Loose particles shed by fireworks.
    pub spawned: u32,
    /// Fireworks that faded out.
    pub retired: u32,
}

pub struct World {
    config: Config,
    random: Randomizer,
    scheduler: Scheduler,
    projectiles: Vec<AscendingProjectile>,
    fireworks: Vec<Firework>,
    loose: Vec<ExplosionParticle>,
    ticks: u64,
}

impl World {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_randomizer(config, Randomizer::new())
    }

    pub fn with_randomizer(config: Config, random: Randomizer) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            scheduler: Scheduler::new(config.launch_interval),
            config,
            random,
            projectiles: Vec::new(),
            fireworks: Vec::new(),
            loose: Vec::new(),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn projectiles(&self) -> &[AscendingProjectile] {
        &self.projectiles
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn loose_particles(&self) -> &[ExplosionParticle] {
        &self.loose
    }

    /// Adds a rocket at column `x`. Speeds that are not positive are ignored.
    pub fn launch(&mut self, x: f32, speed: f32) {
        if speed > 0.0 {
            self.projectiles
                .push(AscendingProjectile::launch(x, speed, &self.config));
        }
    }

    /// Bursts a firework of `generation` at `(x, y)` right away.
    pub fn ignite(&mut self, x: f32, y: f32, generation: u8) {
        let firework = Firework::new(x, y, generation, &self.config, &mut self.random);
        self.fireworks.push(firework);
    }

    pub fn ignite_shape(&mut self, x: f32, y: f32, generation: u8, shape: Shape) {
        let firework =
            Firework::with_shape(x, y, generation, shape, &self.config, &mut self.random);
        self.fireworks.push(firework);
    }

    /// Runs one tick: clear, launch, draw-then-advance every entity, promote
    /// spent rockets, retire faded bursts. Presenting the frame is left to
    /// the caller.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) -> TickReport {
        let mut report = TickReport::default();
        renderer.clear(self.config.background);

        if self.scheduler.is_due() {
            report.launched = self.launch_batch();
        }

        for rocket in &mut self.projectiles {
            rocket.render(renderer);
            rocket.update(&self.config);
        }

        for firework in &mut self.fireworks {
            firework.render(renderer);
            let children = firework.update(&self.config, &mut self.random);
            if !children.is_empty() {
                debug!(
                    generation = firework.generation,
                    count = children.len(),
                    "firework shed next generation"
                );
                report.spawned += children.len() as u32;
                self.loose.extend(children);
            }
        }

        let config = &self.config;
        self.loose.retain_mut(|particle| {
            particle.render(renderer, OPAQUE);
            particle.update(config);
            !particle.is_dead()
        });

        let random = &mut self.random;
        let fireworks = &mut self.fireworks;
        self.projectiles.retain(|rocket| {
            if !rocket.is_spent() {
                return true;
            }
            debug!(x = rocket.x, y = rocket.y, "rocket burst");
            fireworks.push(Firework::new(rocket.x, rocket.y, 1, config, random));
            report.exploded += 1;
            false
        });

        let before = self.fireworks.len();
        self.fireworks.retain(|firework| !firework.is_retired());
        report.retired = (before - self.fireworks.len()) as u32;
        if report.retired > 0 {
            debug!(count = report.retired, "fireworks faded out");
        }

        self.scheduler.advance();
        self.ticks += 1;

        trace!(
            tick = self.ticks,
            rockets = self.projectiles.len(),
            fireworks = self.fireworks.len(),
            loose = self.loose.len(),
            "tick"
        );
        report
    }

    fn launch_batch(&mut self) -> u32 {
        let count = self.random.launch_count(&self.config);
        for _ in 0..count {
            let speed = self.random.launch_speed(&self.config);
            let x = self.random.launch_x(&self.config);
            self.projectiles
                .push(AscendingProjectile::launch(x, speed, &self.config));
        }
        debug!(count, "launch batch");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Recorder;

    fn world(config: Config) -> World {
        World::with_randomizer(config, Randomizer::with_seed(21)).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = Config {
            fade_rate: 0.0,
            ..Config::default()
        };
        assert!(World::new(config).is_err());
    }

    #[test]
    fn tick_clears_with_background() {
        let mut w = world(Config {
            background: (1, 2, 3),
            ..Config::default()
        });
        let mut recorder = Recorder::new();
        w.tick(&mut recorder);
        assert_eq!(recorder.background, Some((1, 2, 3)));
        assert!(recorder.calls.is_empty());
        assert_eq!(w.ticks(), 1);
    }

    #[test]
    fn spent_rocket_becomes_a_firework_where_it_stopped() {
        let mut w = world(Config::default());
        w.launch(321.0, 0.1);
        let mut recorder = Recorder::new();

        let report = w.tick(&mut recorder);
        assert_eq!(report.exploded, 1);
        assert!(w.projectiles().is_empty());
        assert_eq!(w.fireworks().len(), 1);
        let fw = &w.fireworks()[0];
        assert_eq!(fw.x, 321.0);
        assert!((fw.y - 599.9).abs() < 1e-3);
        assert_eq!(fw.generation, 1);
        // new bursts are not advanced on the tick they appear
        assert_eq!(fw.timer, 0);
    }

    #[test]
    fn non_positive_launch_is_ignored() {
        let mut w = world(Config::default());
        w.launch(100.0, 0.0);
        w.launch(100.0, -3.0);
        assert!(w.projectiles().is_empty());
    }

    #[test]
    fn rockets_are_drawn_before_they_move() {
        let mut w = world(Config::default());
        w.launch(200.0, 10.0);
        let mut recorder = Recorder::new();
        w.tick(&mut recorder);
        assert_eq!(recorder.calls.len(), 1);
        assert_eq!(recorder.calls[0].y, 600.0);
        assert_eq!(w.projectiles()[0].y, 590.0);
    }

    #[test]
    fn faded_fireworks_are_retired() {
        let mut w = world(Config {
            generation_cap: 1,
            ..Config::default()
        });
        w.ignite(400.0, 300.0, 1);
        let mut recorder = Recorder::new();
        let mut retired_on = None;
        for tick in 1..=90 {
            if w.tick(&mut recorder).retired == 1 {
                retired_on = Some(tick);
            }
        }
        assert_eq!(retired_on, Some(85));
        assert!(w.fireworks().is_empty());
        assert!(w.loose_particles().is_empty());
    }

    #[test]
    fn loose_particles_drop_out_when_gone() {
        let mut w = world(Config::default());
        w.ignite(400.0, 300.0, 1);
        let mut recorder = Recorder::new();
        for _ in 0..30 {
            w.tick(&mut recorder);
        }
        assert_eq!(w.loose_particles().len(), 360);
        // each loose particle started at size 5.0 and has had one update
        assert!(w.loose_particles().iter().all(|p| p.generation == 2));

        for _ in 0..101 {
            w.tick(&mut recorder);
        }
        assert!(w.loose_particles().is_empty());
    }

    #[test]
    fn shaped_ignition_keeps_requested_shape() {
        let mut w = world(Config::default());
        w.ignite_shape(0.0, 0.0, 2, Shape::Heart);
        assert!(w.fireworks()[0].particles.iter().all(|p| p.is_static()));
    }
}
