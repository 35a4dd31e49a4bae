//! Liquid Headless
//!
//! Replays a navigation script against a menu screen and prints what the
//! display shows after each step, without any hardware attached.
//!
//! # Usage
//!
//! ```bash
//! # Scroll a screen on the default 16x2 display
//! liquid-headless --screen settings.toml --script "next next print next"
//!
//! # Four-row display, JSON frames
//! liquid-headless -s settings.toml --rows 4 --output json --script-file keys.txt
//! ```

mod config;
mod definition;
mod error;
mod runner;
mod script;

use std::error::Error;
use std::fs;
use std::io::{self, Write};

use clap::Parser;
use config::{CliArgs, Config, OutputFormat};
use definition::{CallLog, ScreenDefinition};
use liquid_core::TextDisplay;
use runner::Runner;

fn main() -> Result<(), Box<dyn Error>> {
    // Users can set RUST_LOG=debug to trace focus moves and rendering
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Display: {}x{}", config.columns, config.rows);

    let definition = ScreenDefinition::load(&args.screen)?;
    let source = match (&args.script, &args.script_file) {
        (Some(source), _) => source.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };
    let commands = script::parse(&source)?;

    let calls = CallLog::default();
    let lines = definition.build_lines(&calls)?;
    let screen = definition.build_screen(&lines, &config)?;
    let display = TextDisplay::new(config.columns as usize, config.rows as usize);

    let mut runner = Runner::new(screen, display, calls);
    let frames = runner.run(&commands);
    log::debug!("Final screen state: {:?}", runner.screen().snapshot());

    let output = match config.output {
        OutputFormat::Text => runner::frames_to_text(&frames),
        OutputFormat::Json => runner::frames_to_json(&frames)?,
    };
    io::stdout().write_all(output.as_bytes())?;

    Ok(())
}
