use crate::config::Config;
use crate::particle::{self, ExplosionParticle};
use crate::random::Randomizer;
use crate::render::{Renderer, Rgb};
use crate::trail::{self, TrailDot};

/// Pattern a firework bursts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Heart,
    Shower,
}

impl Shape {
    /// Hearts open the show, later generations scatter.
    pub fn for_generation(generation: u8) -> Self {
        if generation <= 1 { Shape::Heart } else { Shape::Shower }
    }
}

/// One burst: a fixed set of particles fading together.
#[derive(Debug, Clone)]
pub struct Firework {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub generation: u8,
    pub particles: Vec<ExplosionParticle>,
    pub dots: Vec<TrailDot>,
    pub timer: u32,
    pub alpha: f32,
    spawned: bool,
}

impl Firework {
    pub fn new(x: f32, y: f32, generation: u8, config: &Config, random: &mut Randomizer) -> Self {
        Self::with_shape(x, y, generation, Shape::for_generation(generation), config, random)
    }

    pub fn with_shape(
        x: f32,
        y: f32,
        generation: u8,
        shape: Shape,
        config: &Config,
        random: &mut Randomizer,
    ) -> Self {
        let color = random.color();
        let particles = match shape {
            Shape::Heart => particle::heart((x, y), color, generation, config),
            Shape::Shower => particle::shower((x, y), color, generation, config, random),
        };
        Self {
            x,
            y,
            color,
            generation,
            particles,
            dots: Vec::new(),
            timer: 0,
            alpha: 255.0,
            spawned: false,
        }
    }

    pub fn is_retired(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn has_spawned(&self) -> bool {
        self.spawned
    }

    /// Advances one tick. Returns the next generation's particles when the
    /// burst sheds them; the caller takes ownership.
    pub fn update(&mut self, config: &Config, random: &mut Randomizer) -> Vec<ExplosionParticle> {
        self.timer += 1;
        self.alpha = (self.alpha - config.fade_rate).max(0.0);

        for particle in &mut self.particles {
            particle.update(config);
            if particle.speed() > 0.0 {
                self.dots.push(TrailDot::new(
                    particle.x,
                    particle.y,
                    particle.size,
                    particle.color,
                ));
            }
        }
        trail::decay(&mut self.dots, config.trail_decay());

        if !self.spawned
            && self.generation < config.generation_cap
            && self.timer == config.spawn_tick()
        {
            self.spawned = true;
            return self.spawn_next_generation(config, random);
        }
        Vec::new()
    }

    fn is_eligible(&self, particle: &ExplosionParticle, config: &Config) -> bool {
        particle.size > config.base_size * 0.5 && particle.generation == 1 && particle.is_static()
    }

    fn spawn_next_generation(
        &self,
        config: &Config,
        random: &mut Randomizer,
    ) -> Vec<ExplosionParticle> {
        let next = self.generation + 1;
        self.particles
            .iter()
            .filter(|p| self.is_eligible(p, config))
            .map(|p| {
                ExplosionParticle::radial(
                    p.x,
                    p.y,
                    random.burst_speed(),
                    random.burst_angle(),
                    self.color,
                    next,
                    config,
                )
            })
            .collect()
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        let alpha = self.alpha.clamp(0.0, 255.0) as u8;
        for particle in &self.particles {
            particle.render(renderer, alpha);
        }
        for dot in &self.dots {
            dot.render(renderer);
        }
    }
}
