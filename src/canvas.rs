//! In-memory drawing surface.
//!
//! A [`Canvas`] is a square-or-rectangular RGBA pixel grid created fresh for
//! every rendering pass. Pixels are stored with premultiplied alpha, which is
//! the layout rasterisers such as tiny-skia draw into directly; call
//! [`Canvas::to_rgba_image`] to get straight-alpha pixels for encoding.

use image::{Rgba, RgbaImage};

use crate::error::IconError;

/// Opaque white, the icon background.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Opaque black, the glyph stroke and fill colour.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Fully transparent.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Largest width or height a canvas may have.
pub const MAX_CANVAS_SIDE: u32 = 4096;

/// An owned RGBA pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Premultiplied RGBA pixels.
    pixels: RgbaImage,
}

impl Canvas {
    /// Creates a canvas where every pixel is `background`.
    ///
    /// Fails if either side is zero or above [`MAX_CANVAS_SIDE`], or if the
    /// pixel buffer would not fit in memory addressable by this platform.
    pub fn filled(width: u32, height: u32, background: Rgba<u8>) -> Result<Self, IconError> {
        let fits = width > 0
            && height > 0
            && width <= MAX_CANVAS_SIDE
            && height <= MAX_CANVAS_SIDE
            && (width as usize)
                .checked_mul(height as usize)
                .and_then(|n| n.checked_mul(4))
                .is_some();
        if !fits {
            return Err(IconError::CanvasAllocation { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, premultiply(background)),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns the straight-alpha colour at `(x, y)`, or `None` when the
    /// coordinate is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(unpremultiply(*self.pixels.get_pixel(x, y)))
    }

    /// Raw premultiplied bytes, row-major, four bytes per pixel.
    pub(crate) fn premultiplied_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Converts the canvas to a straight-alpha image ready for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut out = self.pixels.clone();
        for pixel in out.pixels_mut() {
            *pixel = unpremultiply(*pixel);
        }
        out
    }
}

fn premultiply(color: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
    Rgba([scale(r), scale(g), scale(b), a])
}

fn unpremultiply(color: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    if a == 0 {
        return TRANSPARENT;
    }
    let a_f = a as f32 / 255.0;
    let scale = |c: u8| (c as f32 / a_f).round().min(255.0) as u8;
    Rgba([scale(r), scale(g), scale(b), a])
}
