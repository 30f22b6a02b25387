/// Character-cell drawing surface for the terminal frontend
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use spincube_core::{RenderSurface, Rgb};
use std::io::Write;

/// Character luminosity ramp (darkest to lightest); fill shades pick their
/// character by colour brightness.
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    colour: Rgb,
}

const BLANK: Cell = Cell {
    ch: ' ',
    colour: Rgb::new(0, 0, 0),
};

/// Implements the canvas-style path protocol over a grid of coloured
/// characters: Bresenham for strokes, even-odd scanline for fills.
///
/// Terminal cells are roughly twice as tall as they are wide, so the
/// surface reports a logical canvas of two rows per cell and halves y when
/// plotting; the pipeline sees square pixels and the cube keeps its
/// proportions.
pub struct CellSurface {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    path: Vec<(i32, i32)>,
    closed: bool,
}

impl CellSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
            path: Vec::with_capacity(8),
            closed: false,
        }
    }

    /// Plot a logical pixel; two logical rows land on the same cell row.
    fn plot(&mut self, x: i32, y: i32, ch: char, colour: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 * 2 {
            return;
        }
        let row = y as usize / 2;
        self.cells[row * self.width + x as usize] = Cell { ch, colour };
    }

    fn stroke_segment(&mut self, from: (i32, i32), to: (i32, i32), ch: char, colour: Rgb) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, ch, colour);
            if (x, y) == to {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += sx;
            }
            if doubled <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_polygon(&mut self, ch: char, colour: Rgb) {
        if self.path.len() < 3 {
            return;
        }
        let min_y = self.path.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let max_y = self
            .path
            .iter()
            .map(|p| p.1)
            .max()
            .unwrap_or(-1)
            .min(self.height as i32 * 2 - 1);

        let points = self.path.clone();
        let count = points.len();
        let mut crossings: Vec<f32> = Vec::with_capacity(count);
        for y in min_y..=max_y {
            let scanline = y as f32;
            crossings.clear();
            for i in 0..count {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % count];
                let (x0, y0) = (x0 as f32, y0 as f32);
                let (x1, y1) = (x1 as f32, y1 as f32);
                // Half-open vertex rule so shared corners count once.
                if (y0 <= scanline && y1 > scanline) || (y1 <= scanline && y0 > scanline) {
                    let t = (scanline - y0) / (y1 - y0);
                    crossings.push(x0 + t * (x1 - x0));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let start = pair[0].round() as i32;
                let end = pair[1].round() as i32;
                for x in start..=end {
                    self.plot(x, y, ch, colour);
                }
            }
        }
    }

    /// Map a fill colour to a ramp character by perceptual brightness.
    fn luminosity_char(colour: Rgb) -> char {
        let luma = (0.2126 * colour.r as f32 + 0.7152 * colour.g as f32
            + 0.0722 * colour.b as f32)
            / 255.0;
        let index = (luma * (LUMINOSITY_RAMP.len() - 1) as f32).round() as usize;
        LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
    }

    /// Queue the whole grid to the terminal, one coloured character per
    /// cell.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            // Raw mode: position each row explicitly instead of newlines.
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                writer.queue(SetForegroundColor(Color::Rgb {
                    r: cell.colour.r,
                    g: cell.colour.g,
                    b: cell.colour.b,
                }))?;
                writer.queue(Print(cell.ch))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    #[cfg(test)]
    fn cell_at(&self, x: usize, y: usize) -> (char, Rgb) {
        let cell = self.cells[y * self.width + x];
        (cell.ch, cell.colour)
    }
}

impl RenderSurface for CellSurface {
    fn width(&self) -> u32 {
        self.width as u32
    }

    fn height(&self) -> u32 {
        // Logical canvas height: two rows per cell, see the struct docs.
        (self.height * 2) as u32
    }

    fn clear(&mut self) {
        self.cells.fill(BLANK);
        self.path.clear();
        self.closed = false;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.path.clear();
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.path.push((x, y));
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn stroke(&mut self, colour: Rgb, _line_width: f32) {
        let ch = Self::luminosity_char(colour);
        let segments = self.path.len().saturating_sub(1);
        let points = self.path.clone();
        for i in 0..segments {
            self.stroke_segment(points[i], points[i + 1], ch, colour);
        }
        if self.closed && points.len() > 2 {
            self.stroke_segment(points[points.len() - 1], points[0], ch, colour);
        }
    }

    fn fill(&mut self, colour: Rgb) {
        let ch = Self::luminosity_char(colour);
        self.fill_polygon(ch, colour);
    }
}
