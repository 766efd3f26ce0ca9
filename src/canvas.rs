use egui::{Color32, ColorImage, Pos2};
use image::{Rgba, RgbaImage};

use crate::error::{PaintError, PaintResult};
use crate::stroke::Segment;

pub const DEFAULT_CANVAS_WIDTH: u32 = 900;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Background colour of a fresh or cleared canvas.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Lower bound on the paint radius so 1px strokes reach the pixels
/// diagonally adjacent to an integer coordinate.
const MIN_REACH: f32 = 0.75;

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

fn to_color32(pixel: &Rgba<u8>) -> Color32 {
    let [r, g, b, a] = pixel.0;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Fixed-size raster the user paints on.
///
/// There is no stroke history: a painted pixel only goes back to white
/// through [`Canvas::clear`] or by painting over it.
pub struct Canvas {
    pixels: RgbaImage,
    /// Bumped on every mutation so the renderer can skip unchanged frames.
    version: u64,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("version", &self.version)
            .finish()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            pixels: RgbaImage::from_pixel(
                DEFAULT_CANVAS_WIDTH,
                DEFAULT_CANVAS_HEIGHT,
                to_rgba(BACKGROUND),
            ),
            version: 0,
        }
    }
}

impl Canvas {
    /// Creates a white canvas. Zero-sized canvases are rejected.
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(BACKGROUND)),
            version: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width() as usize, self.height() as usize]
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Colour at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if x < self.width() && y < self.height() {
            Some(to_color32(self.pixels.get_pixel(x, y)))
        } else {
            None
        }
    }

    /// Fills the whole canvas with the background colour.
    pub fn clear(&mut self) {
        let white = to_rgba(BACKGROUND);
        for pixel in self.pixels.pixels_mut() {
            *pixel = white;
        }
        self.version += 1;
    }

    /// Rasterises `segment` with round caps, clipped to the canvas.
    ///
    /// A pixel is painted when its centre lies within half the segment width
    /// of the centre line. Thin strokes still reach the pixels touching the
    /// centre line. Returns the number of pixels written; non-finite
    /// segments write nothing.
    pub fn draw_segment(&mut self, segment: &Segment) -> usize {
        if !segment.is_finite() {
            return 0;
        }

        let reach = (segment.width() * 0.5).max(MIN_REACH);
        let (from, to) = (segment.from(), segment.to());

        let min_x = (from.x.min(to.x) - reach).floor().max(0.0);
        let min_y = (from.y.min(to.y) - reach).floor().max(0.0);
        let max_x = (from.x.max(to.x) + reach).ceil().min(self.width() as f32 - 1.0);
        let max_y = (from.y.max(to.y) + reach).ceil().min(self.height() as f32 - 1.0);
        if min_x > max_x || min_y > max_y {
            return 0;
        }

        let color = to_rgba(segment.color());
        let mut written = 0;
        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let centre = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if segment.distance_to(centre) <= reach {
                    self.pixels.put_pixel(x, y, color);
                    written += 1;
                }
            }
        }

        if written > 0 {
            self.version += 1;
        }
        written
    }

    /// Number of pixels that currently hold `color`.
    pub fn count_pixels(&self, color: Color32) -> usize {
        let target = to_rgba(color);
        self.pixels.pixels().filter(|p| **p == target).count()
    }

    /// True when every pixel holds `color`.
    pub fn is_filled_with(&self, color: Color32) -> bool {
        let target = to_rgba(color);
        self.pixels.pixels().all(|p| *p == target)
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(self.size(), self.pixels.as_raw())
    }
}
