/*
 *  display/mod.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Display subsystem: driver abstraction, panels, page components
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

pub mod components;
pub mod drivers;
pub mod error;
pub mod traits;

// Re-exports
pub use components::CalendarPage;
pub use drivers::{MockPanel, PbmPanel};
pub use error::DisplayError;
pub use traits::{DisplayCapabilities, DisplayDriver};
