/*
 *  main.rs
 *
 *  MonCal - the month at a glance
 *  (c) 2026 the MonCal authors
 *
 *  Render the current month onto a monochrome panel preview
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

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use env_logger::Env;
use log::info;

use moncal::config;
use moncal::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use moncal::display::{CalendarPage, DisplayDriver, PbmPanel};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn main() -> anyhow::Result<()> {
    let cfg = config::load().context("loading configuration")?;

    let default_level = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("moncal {} (built {})", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let display = cfg.display.clone().unwrap_or_default();
    let width = display.width.unwrap_or(DISPLAY_WIDTH);
    let height = display.height.unwrap_or(DISPLAY_HEIGHT);
    let unix_time = cfg
        .timestamp
        .unwrap_or_else(|| Utc::now().timestamp() as u32);
    let output = cfg
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("calendar.pbm"));

    let mut panel = PbmPanel::new(width, height, output.clone());
    panel.init().context("initializing panel")?;

    let page = CalendarPage::new();
    page.render(unix_time, &mut panel)
        .context("rendering calendar page")?;
    panel.flush().context("writing preview image")?;

    info!(
        "calendar for timestamp {unix_time} written to {}",
        output.display()
    );
    Ok(())
}
