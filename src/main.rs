mod appearance;
mod clargs;
mod grid_app;
mod grid_state;
mod options;
mod snapshot;

use crate::appearance::Appearance;
use crate::clargs::PixgridArgs;
use crate::grid_app::GridApp;
use crate::grid_state::{GridState, GridStateError};
use crate::options::{Options, OptionsError};
use clap::Parser;
use eframe::{egui, NativeOptions};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::Path;
use std::process::exit;

const WINDOW_MARGIN: f32 = 16.0;
const WINDOW_CHROME_HEIGHT: f32 = 64.0;

fn main() {
    // Setup logging
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("Unable to start the logger!");

    let args = PixgridArgs::parse();

    // Assemble and check the display options
    let options = match build_options(&args) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            exit(1);
        }
    };
    let appearance = match Appearance::resolve(&options) {
        Ok(appearance) => appearance,
        Err(e) => {
            log::error!("{e}");
            exit(1);
        }
    };

    // Load the initial pixel state
    let state = match load_state(&args, &options) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e}");
            exit(1);
        }
    };

    // In snapshot mode, render a single PNG and exit without starting the GUI
    if let Some(path) = &args.snapshot {
        let image = snapshot::render(&appearance, &state);
        if let Err(e) = snapshot::write_png(&image, path) {
            log::error!("Failed to write snapshot to {path}: {e}");
            exit(1);
        }
        log::info!("Wrote snapshot to {path}");
        return;
    }

    // Setup window options
    let window_size = egui::Vec2::new(
        options.columns as f32 * options.pixel_size + 2.0 * WINDOW_MARGIN,
        options.rows as f32 * options.pixel_size + 2.0 * WINDOW_MARGIN + WINDOW_CHROME_HEIGHT,
    );
    let native_options = NativeOptions {
        initial_window_size: Some(window_size),
        ..Default::default()
    };

    // Start the GUI
    let app = GridApp::new(options, appearance, state, args.state.clone());
    eframe::run_native("Pixgrid", native_options, Box::new(|_cc| Box::new(app)))
        .expect("Unable to start egui app!");
}

/// Build the display options from the command line: start from the options
/// file if one was given, apply the per-field overrides, then check the
/// semantic constraints.
fn build_options(args: &PixgridArgs) -> Result<Options, OptionsError> {
    let mut options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    if let Some(columns) = args.columns {
        options.columns = columns;
    }
    if let Some(rows) = args.rows {
        options.rows = rows;
    }
    if let Some(pixel_size) = args.pixel_size {
        options.pixel_size = pixel_size;
    }
    if let Some(color) = &args.background_color {
        options.background_color = color.clone();
    }
    if let Some(color) = &args.border_color {
        options.border_color = color.clone();
    }
    if let Some(size) = &args.border_size {
        options.border_size = size.clone();
    }
    if let Some(color) = &args.pixel_on_color {
        options.pixel_on_color = color.clone();
    }
    if let Some(color) = &args.pixel_off_color {
        options.pixel_off_color = color.clone();
    }

    options.validate()?;
    Ok(options)
}

/// Load the initial pixel state, or start with an empty grid. A saved state
/// whose dimensions disagree with the options is resized to fit.
fn load_state(args: &PixgridArgs, options: &Options) -> Result<GridState, GridStateError> {
    let path = match &args.state {
        Some(path) => path,
        None => return Ok(GridState::new(options.rows, options.columns)),
    };

    if !Path::new(path).exists() {
        log::info!("Pixel state file {path} does not exist yet, starting with an empty grid");
        return Ok(GridState::new(options.rows, options.columns));
    }

    let mut state = GridState::load(path)?;
    if state.rows() != options.rows || state.columns() != options.columns {
        log::warn!(
            "Pixel state file {path} is {}x{}, but the options ask for {}x{}; resizing",
            state.columns(),
            state.rows(),
            options.columns,
            options.rows
        );
        state.resize(options.rows, options.columns);
    }

    Ok(state)
}
