//! In-memory render surface
//!
//! A heap-backed 320x240 Rgb565 pixel store implementing
//! `DrawTarget<Color = Rgb565>`. This is the surface the tests render into
//! (pixels can be read back and compared), and a host-usable target for
//! anything that wants raw pixel access. Out-of-bounds draws are clipped.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::render::constants::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use crate::ui::styling::colors::BLACK;

/// Total number of pixels in the framebuffer (320 x 240 = 76,800).
const PIXEL_COUNT: usize = DISPLAY_WIDTH_PX as usize * DISPLAY_HEIGHT_PX as usize;

/// Heap-backed display-sized pixel buffer.
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Allocate a new framebuffer filled with black pixels.
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; PIXEL_COUNT],
        }
    }

    /// Read back a single pixel. `None` outside the display bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x >= DISPLAY_WIDTH_PX || y >= DISPLAY_HEIGHT_PX {
            return None;
        }
        Some(self.pixels[(y * DISPLAY_WIDTH_PX + x) as usize])
    }

    /// The whole buffer in row-major order.
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        self.pixels[y * DISPLAY_WIDTH_PX as usize + x] = color;
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = DISPLAY_WIDTH_PX as usize;
        let h = DISPLAY_HEIGHT_PX as usize;

        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = DISPLAY_WIDTH_PX as i32;
        let h = DISPLAY_HEIGHT_PX as i32;

        let x_start = area.top_left.x.clamp(0, w) as usize;
        let y_start = area.top_left.y.clamp(0, h) as usize;
        let x_end = area
            .top_left
            .x
            .saturating_add(area.size.width as i32)
            .clamp(0, w) as usize;
        let y_end = area
            .top_left
            .y
            .saturating_add(area.size.height as i32)
            .clamp(0, h) as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}
