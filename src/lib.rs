//! Heart-burst fireworks: rockets climb, burst into a heart, and the heart
//! sheds a falling shower half a second later.
//!
//! [`World`] owns the simulation and draws through any [`Renderer`];
//! [`TerminalCanvas`] is the terminal one.

pub mod canvas;
pub mod clock;
pub mod config;
pub mod error;
pub mod firework;
pub mod particle;
pub mod projectile;
pub mod random;
pub mod render;
pub mod scheduler;
pub mod trail;
pub mod world;

pub use canvas::TerminalCanvas;
pub use clock::TickClock;
pub use config::Config;
pub use error::ConfigError;
pub use firework::{Firework, Shape};
pub use particle::{ExplosionParticle, Motion};
pub use projectile::AscendingProjectile;
pub use random::Randomizer;
pub use render::{DrawCall, Recorder, Renderer, Rgb};
pub use scheduler::Scheduler;
pub use trail::TrailDot;
pub use world::{TickReport, World};
