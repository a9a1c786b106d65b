/*
 *  display/traits.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Core trait definitions for the panel driver abstraction
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

use crate::display::error::DisplayError;

/// Panel dimensions and metadata.
#[derive(Debug, Clone)]
pub struct DisplayCapabilities {
    /// Panel width in pixels.
    pub width: u32,

    /// Panel height in pixels.
    pub height: u32,
}

/// Minimal abstraction every panel backend implements.
///
/// Drawing itself goes through `embedded_graphics::DrawTarget`, which the
/// backends implement directly on their framebuffer; this trait covers the
/// lifecycle around a draw pass.
pub trait DisplayDriver {
    /// Returns the capabilities of this panel.
    fn capabilities(&self) -> &DisplayCapabilities;

    /// Returns the panel dimensions as (width, height).
    fn dimensions(&self) -> (u32, u32) {
        let caps = self.capabilities();
        (caps.width, caps.height)
    }

    /// Prepare the panel for rendering.
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Push the framebuffer out to the panel (or preview file).
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Blank the panel.
    fn clear(&mut self) -> Result<(), DisplayError>;
}
