use crate::render::{Renderer, Rgb};
use std::io::{self, Write};

/// Terminal renderer drawing with lower half blocks, two pixels per cell.
///
/// World coordinates are scaled onto the pixel grid, so the simulation keeps
/// its own units whatever the terminal size.
pub struct TerminalCanvas<W: Write> {
    out: W,
    width: usize,
    height: usize,
    scale_x: f32,
    scale_y: f32,
    pixels: Vec<Rgb>,
    output_buf: Vec<u8>,
}

impl<W: Write> TerminalCanvas<W> {
    /// `cols` x `rows` terminal cells showing a `world_w` x `world_h` world.
    pub fn new(out: W, cols: usize, rows: usize, world_w: f32, world_h: f32) -> Self {
        let width = cols.max(1);
        let height = rows.max(1) * 2;
        Self {
            out,
            width,
            height,
            scale_x: width as f32 / world_w,
            scale_y: height as f32 / world_h,
            pixels: vec![(0, 0, 0); width * height],
            output_buf: Vec::with_capacity(width * height * 25),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn blend(&mut self, px: isize, py: isize, color: Rgb, alpha: u8) {
        if px < 0 || py < 0 || px as usize >= self.width || py as usize >= self.height {
            return;
        }
        let idx = py as usize * self.width + px as usize;
        if alpha == 255 {
            self.pixels[idx] = color;
            return;
        }
        let a = alpha as f32 / 255.0;
        let dst = self.pixels[idx];
        let mix = |d: u8, s: u8| (d as f32 * (1.0 - a) + s as f32 * a).round() as u8;
        self.pixels[idx] = (mix(dst.0, color.0), mix(dst.1, color.1), mix(dst.2, color.2));
    }
}

impl<W: Write> Renderer for TerminalCanvas<W> {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn draw_filled_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: u8) {
        if radius <= 0.0 || alpha == 0 {
            return;
        }
        let cx = x * self.scale_x;
        let cy = y * self.scale_y;
        let rx = radius * self.scale_x;
        let ry = radius * self.scale_y;

        // Smaller than a pixel: light the one it falls in
        if rx < 0.5 && ry < 0.5 {
            self.blend(cx.floor() as isize, cy.floor() as isize, color, alpha);
            return;
        }

        let rx = rx.max(0.5);
        let ry = ry.max(0.5);
        let x0 = (cx - rx).floor() as isize;
        let x1 = (cx + rx).ceil() as isize;
        let y0 = (cy - ry).floor() as isize;
        let y1 = (cy + ry).ceil() as isize;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = (px as f32 + 0.5 - cx) / rx;
                let dy = (py as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend(px, py, color, alpha);
                }
            }
        }
    }

    fn present(&mut self) -> io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let mut prev_top: Option<Rgb> = None;
        let mut prev_bot: Option<Rgb> = None;

        for y in (0..self.height).step_by(2) {
            for x in 0..self.width {
                let top = self.pixels[y * self.width + x];
                let bot = if y + 1 < self.height {
                    self.pixels[(y + 1) * self.width + x]
                } else {
                    top
                };

                if prev_top != Some(top) {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = Some(top);
                }
                if prev_bot != Some(bot) {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = Some(bot);
                }
                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_top = None;
            prev_bot = None;
            if y + 2 < self.height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        self.out.write_all(&self.output_buf)?;
        self.out.flush()
    }
}
