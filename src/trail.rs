use crate::render::{OPAQUE, Renderer, Rgb};

/// Fading sample left behind a moving particle.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailDot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgb,
}

impl TrailDot {
    pub fn new(x: f32, y: f32, size: f32, color: Rgb) -> Self {
        Self { x, y, size, color }
    }

    pub fn update(&mut self, decrement: f32) {
        self.size = (self.size - decrement).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.size <= 0.0
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        if self.is_dead() {
            return;
        }
        renderer.draw_filled_circle(self.x, self.y, self.size, self.color, OPAQUE);
    }
}

/// Shrinks every dot and drops the ones that vanished.
pub fn decay(dots: &mut Vec<TrailDot>, decrement: f32) {
    dots.retain_mut(|dot| {
        dot.update(decrement);
        !dot.is_dead()
    });
}
