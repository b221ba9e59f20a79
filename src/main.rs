// src/main.rs

//! Demo driver for the grid overlay.
//!
//! Runs the controller against the headless host: commands are read from
//! stdin, pointer moves and overlay lifecycle show up in the log. Useful for
//! poking at the zoom behavior without a real display.

use anyhow::Context;
use log::{error, info, warn};
use std::io::BufRead;
use std::path::Path;

use finegrid::host::headless::HeadlessHost;
use finegrid::{Config, GridCommand, OverlayController, Rect};

const DEFAULT_SCREEN_RECT: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1920.0,
    height: 1080.0,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting finegrid demo...");

    let config = match std::env::var("FINEGRID_CONFIG") {
        Ok(path) => Config::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        Err(_) => {
            info!("FINEGRID_CONFIG not set, using default configuration");
            Config::default()
        }
    };

    let mut host = HeadlessHost::single_screen(DEFAULT_SCREEN_RECT);
    let mut controller = OverlayController::new(&mut host, config);
    info!("Commands: activate [n] | select <rowcol> | zoom <rowcol> | reset | close | quit");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading command from stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            break;
        }
        match GridCommand::parse(trimmed) {
            Ok(command) => {
                if let Err(err) = controller.dispatch(command) {
                    error!("command failed: {err}");
                }
            }
            Err(err) => warn!("{err}"),
        }
    }

    controller.deactivate();
    info!("finegrid exited.");
    Ok(())
}
