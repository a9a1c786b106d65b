/*
 *  display/drivers/pbm.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Panel backend that flushes to a PBM preview image
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

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::canvas::Canvas;
use crate::display::error::DisplayError;
use crate::display::traits::{DisplayCapabilities, DisplayDriver};

/// Panel backend for desktop use: each `flush()` writes the framebuffer
/// as a plain-text PBM (P1) image, lit pixels as `1`.
#[derive(Debug)]
pub struct PbmPanel {
    canvas: Canvas<BinaryColor>,
    capabilities: DisplayCapabilities,
    path: PathBuf,
}

impl PbmPanel {
    pub fn new(width: u32, height: u32, path: PathBuf) -> Self {
        Self {
            canvas: Canvas::new(width, height, BinaryColor::Off),
            capabilities: DisplayCapabilities { width, height },
            path,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write_pbm<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "P1")?;
        writeln!(out, "{} {}", self.capabilities.width, self.capabilities.height)?;
        for y in 0..self.capabilities.height {
            let mut line = String::with_capacity(self.capabilities.width as usize * 2);
            for (x, &pixel) in self.canvas.row(y).iter().enumerate() {
                if x > 0 {
                    line.push(' ');
                }
                line.push(if pixel == BinaryColor::On { '1' } else { '0' });
            }
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl DisplayDriver for PbmPanel {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        self.canvas.fill(BinaryColor::Off);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        self.write_pbm(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.canvas.fill(BinaryColor::Off);
        Ok(())
    }
}

impl DrawTarget for PbmPanel {
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

impl OriginDimensions for PbmPanel {
    fn size(&self) -> Size {
        Size::new(self.capabilities.width, self.capabilities.height)
    }
}
