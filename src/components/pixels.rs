use image::RgbaImage;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::{
    constants::game::{BOARD_HEIGHT, BOARD_WIDTH},
    pages::game::Bounds,
};

const UPPER_HALF_BLOCK: char = '\u{2580}';

/// Pixels at least this opaque are drawn, the rest are cut out.
const ALPHA_CUTOFF: u8 = 128;

/// An RGB pixel buffer covering the whole board, drawn two pixels per terminal cell.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![[0, 0, 0]; width * height] }
    }

    /// A canvas filling `area`, one pixel per column and two per row.
    pub fn for_area(area: Rect) -> Self {
        Self::new(area.width as usize, area.height as usize * 2)
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Stretches `image` over the board rectangle `target`, clipped to the board.
    pub fn blit(&mut self, image: &RgbaImage, target: Bounds) {
        if self.width == 0 || self.height == 0 || image.width() == 0 || image.height() == 0 {
            return;
        }
        if target.width <= 0 || target.height <= 0 {
            return;
        }

        let scale_x = self.width as f64 / BOARD_WIDTH as f64;
        let scale_y = self.height as f64 / BOARD_HEIGHT as f64;
        let columns = span(target.x, target.right(), scale_x, self.width);
        let rows = span(target.y, target.bottom(), scale_y, self.height);

        for py in rows {
            // Sample at the pixel centre, in board units.
            let board_y = (py as f64 + 0.5) / scale_y;
            let Some(v) = texel(board_y, target.y, target.height, image.height()) else {
                continue;
            };
            for px in columns.clone() {
                let board_x = (px as f64 + 0.5) / scale_x;
                let Some(u) = texel(board_x, target.x, target.width, image.width()) else {
                    continue;
                };
                let [r, g, b, a] = image.get_pixel(u, v).0;
                if a >= ALPHA_CUTOFF {
                    self.pixels[py * self.width + px] = [r, g, b];
                }
            }
        }
    }
}

/// Canvas pixels touched by the board interval `[start, end)`.
fn span(start: i32, end: i32, scale: f64, limit: usize) -> std::ops::Range<usize> {
    let first = (start as f64 * scale).floor().clamp(0.0, limit as f64) as usize;
    let last = (end as f64 * scale).ceil().clamp(0.0, limit as f64) as usize;
    first..last.max(first)
}

/// Image coordinate for a board position inside `[origin, origin + extent)`.
fn texel(position: f64, origin: i32, extent: i32, size: u32) -> Option<u32> {
    let offset = position - origin as f64;
    if offset < 0.0 || offset >= extent as f64 {
        return None;
    }
    Some(((offset / extent as f64 * size as f64) as u32).min(size - 1))
}

fn to_color([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let columns = self.width.min(area.width as usize);
        let rows = (self.height / 2).min(area.height as usize);

        for row in 0..rows {
            for column in 0..columns {
                let upper = self.pixels[row * 2 * self.width + column];
                let lower = self.pixels[(row * 2 + 1) * self.width + column];
                buf[(area.x + column as u16, area.y + row as u16)]
                    .set_char(UPPER_HALF_BLOCK)
                    .set_fg(to_color(upper))
                    .set_bg(to_color(lower));
            }
        }
    }
}
