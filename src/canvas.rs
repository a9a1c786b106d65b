/*
 *  canvas.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Runtime-sized framebuffer backing the panel drivers
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

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// In-memory pixel canvas for embedded-graphics, sized at runtime.
///
/// Out-of-bounds pixels are clipped silently, so components may draw
/// glyphs that run past the panel edge without faulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas<C: PixelColor> {
    pixels: Vec<C>,
    width: u32,
    height: u32,
}

impl<C: PixelColor> Canvas<C> {
    pub fn new(width: u32, height: u32, fill: C) -> Self {
        Self {
            pixels: vec![fill; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel data, for panel flushes and test inspection.
    pub fn as_slice(&self) -> &[C] {
        &self.pixels
    }

    /// Pixel at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<C> {
        if x < self.width && y < self.height {
            self.pixels.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }

    /// One row of pixels, for streaming writers.
    pub fn row(&self, y: u32) -> &[C] {
        let start = (y * self.width) as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn fill(&mut self, color: C) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as u32, p.y as u32);
        (x < self.width && y < self.height).then(|| (y * self.width + x) as usize)
    }
}

impl<C: PixelColor> OriginDimensions for Canvas<C> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl<C: PixelColor> DrawTarget for Canvas<C> {
    type Color = C;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Fast path for the rectangle fills the primitives issue; clips
        // against all four canvas edges.
        let mut colors = colors.into_iter();
        for y in 0..area.size.height as i32 {
            for x in 0..area.size.width as i32 {
                let Some(color) = colors.next() else {
                    return Ok(());
                };
                let point = area.top_left + Point::new(x, y);
                if let Some(i) = self.index(point) {
                    self.pixels[i] = color;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn new_canvas_is_uniform() {
        let canvas = Canvas::new(16, 8, BinaryColor::Off);
        assert_eq!(canvas.as_slice().len(), 128);
        assert!(canvas.as_slice().iter().all(|&p| p == BinaryColor::Off));
    }

    #[test]
    fn draw_iter_sets_pixels_and_clips() {
        let mut canvas = Canvas::new(16, 8, BinaryColor::Off);
        canvas
            .draw_iter([
                Pixel(Point::new(3, 2), BinaryColor::On),
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(16, 0), BinaryColor::On),
                Pixel(Point::new(0, 8), BinaryColor::On),
            ])
            .unwrap();
        assert_eq!(canvas.pixel(3, 2), Some(BinaryColor::On));
        assert_eq!(
            canvas.as_slice().iter().filter(|&&p| p == BinaryColor::On).count(),
            1
        );
    }

    #[test]
    fn rectangle_fill_clips_at_the_edge() {
        let mut canvas = Canvas::new(16, 8, BinaryColor::Off);
        Rectangle::new(Point::new(12, 4), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas)
            .unwrap();
        // Only the 4x4 overlap lands on the canvas.
        assert_eq!(
            canvas.as_slice().iter().filter(|&&p| p == BinaryColor::On).count(),
            16
        );
        assert_eq!(canvas.pixel(15, 7), Some(BinaryColor::On));
        assert_eq!(canvas.pixel(11, 4), Some(BinaryColor::Off));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut canvas = Canvas::new(16, 8, BinaryColor::On);
        DrawTarget::clear(&mut canvas, BinaryColor::Off).unwrap();
        assert!(canvas.as_slice().iter().all(|&p| p == BinaryColor::Off));
    }

    #[test]
    fn row_returns_the_requested_scanline() {
        let mut canvas = Canvas::new(4, 2, BinaryColor::Off);
        canvas
            .draw_iter([Pixel(Point::new(2, 1), BinaryColor::On)])
            .unwrap();
        assert_eq!(canvas.row(0), &[BinaryColor::Off; 4]);
        assert_eq!(canvas.row(1)[2], BinaryColor::On);
    }
}
