//! The drawing surface the simulation paints onto.
//!
//! The simulation only ever clears, draws filled circles and presents. The
//! terminal implementation lives in [`canvas`](crate::canvas); [`Recorder`]
//! keeps the calls in memory for tests and headless runs.

use std::io;

pub type Rgb = (u8, u8, u8);

pub const OPAQUE: u8 = 255;

pub trait Renderer {
    fn clear(&mut self, color: Rgb);

    /// Filled circle in world coordinates, blended with `alpha` (0..=255).
    fn draw_filled_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: u8);

    fn present(&mut self) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: u8,
}

/// Keeps the draw calls of the current frame.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
    pub background: Option<Rgb>,
    pub frames: u64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for Recorder {
    fn clear(&mut self, color: Rgb) {
        self.calls.clear();
        self.background = Some(color);
    }

    fn draw_filled_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: u8) {
        self.calls.push(DrawCall {
            x,
            y,
            radius,
            color,
            alpha,
        });
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}
