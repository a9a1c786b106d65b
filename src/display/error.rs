/*
 *  display/error.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Unified error type for the display subsystem
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

use thiserror::Error;

/// Unified error type for all display operations.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The timestamp could not be decomposed into calendar fields.
    #[error("timestamp {0} is outside the representable range")]
    InvalidTimestamp(u32),

    /// The draw target rejected a primitive.
    #[error("draw target error: {0}")]
    Draw(String),

    /// The font renderer failed for a reason other than a missing glyph.
    #[error("font rendering failed: {0}")]
    Font(String),

    /// The selected font has no glyph for a character.
    #[error("no glyph for character {0:?}")]
    GlyphNotFound(char),

    /// A label overflowed its fixed-capacity buffer.
    #[error("label formatting overflowed its buffer")]
    Format(#[from] core::fmt::Error),

    /// Invalid panel configuration.
    #[error("invalid display configuration: {0}")]
    InvalidConfiguration(String),

    /// Writing the preview image failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
