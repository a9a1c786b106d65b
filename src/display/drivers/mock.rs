/*
 *  display/drivers/mock.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Mock panel backend for testing without hardware
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::canvas::Canvas;
use crate::display::error::DisplayError;
use crate::display::traits::{DisplayCapabilities, DisplayDriver};

/// Panel backend that only records pixels, for unit and integration tests.
///
/// Exposes the framebuffer and lifecycle counters so tests can verify what
/// a render pass actually produced.
#[derive(Debug, Clone)]
pub struct MockPanel {
    canvas: Canvas<BinaryColor>,
    capabilities: DisplayCapabilities,

    /// Number of times init() was called.
    pub init_count: usize,
    /// Number of times flush() was called.
    pub flush_count: usize,
    /// Number of times clear() was called.
    pub clear_count: usize,
}

impl MockPanel {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: Canvas::new(width, height, BinaryColor::Off),
            capabilities: DisplayCapabilities { width, height },
            init_count: 0,
            flush_count: 0,
            clear_count: 0,
        }
    }

    /// Pixel at (x, y), or `None` outside the panel.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<BinaryColor> {
        self.canvas.pixel(x, y)
    }

    /// Snapshot of the framebuffer.
    pub fn framebuffer(&self) -> &Canvas<BinaryColor> {
        &self.canvas
    }

    /// Total number of lit pixels.
    pub fn count_on_pixels(&self) -> usize {
        self.canvas
            .as_slice()
            .iter()
            .filter(|&&p| p == BinaryColor::On)
            .count()
    }

    /// Number of lit pixels inside a rectangle (clipped to the panel).
    pub fn count_on_in_rect(&self, rect: &Rectangle) -> usize {
        let mut count = 0;
        for dy in 0..rect.size.height as i32 {
            for dx in 0..rect.size.width as i32 {
                let p = rect.top_left + Point::new(dx, dy);
                if p.x >= 0
                    && p.y >= 0
                    && self.canvas.pixel(p.x as u32, p.y as u32) == Some(BinaryColor::On)
                {
                    count += 1;
                }
            }
        }
        count
    }
}

impl DisplayDriver for MockPanel {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        self.init_count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flush_count += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.clear_count += 1;
        self.canvas.fill(BinaryColor::Off);
        Ok(())
    }
}

impl DrawTarget for MockPanel {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.canvas.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(&mut self.canvas, color)
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.canvas.fill_contiguous(area, colors)
    }
}

impl OriginDimensions for MockPanel {
    fn size(&self) -> Size {
        Size::new(self.capabilities.width, self.capabilities.height)
    }
}
