mod app;
mod cli;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod highscore;
mod menu;
mod util;
mod warning;
use crate::app::{App, Globals};
use crate::cli::Arguments;
use crate::config::Config;
use anyhow::Context;
use log::{info, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let parser = lexopt::Parser::from_env();
    let bin_name = parser
        .bin_name()
        .unwrap_or(env!("CARGO_PKG_NAME"))
        .to_owned();
    let args = match cli::Command::from_parser(parser) {
        Ok(cli::Command::Run(args)) => args,
        Ok(cli::Command::Help) => {
            print!("{}", cli::Command::help_text(&bin_name));
            return ExitCode::SUCCESS;
        }
        Ok(cli::Command::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{bin_name}: {e}");
            eprintln!("Run `{bin_name} --help` for usage");
            return ExitCode::from(2);
        }
    };
    let globals = match setup(args) {
        Ok(globals) => globals,
        Err(e) => {
            eprintln!("{bin_name}: {e:?}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(globals).run(terminal);
    ratatui::restore();
    info!("Exiting");
    io_exit(r)
}

/// Load the configuration, start logging, and read the high score
fn setup(args: Arguments) -> anyhow::Result<Globals> {
    let config = if let Some(path) = args.config {
        Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    } else {
        let path = Config::default_path()?;
        Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    };
    let level = args.log_level.unwrap_or(config.logging.level);
    if level != LevelFilter::Off {
        if let Some(path) = config.log_file() {
            if let Err(e) = init_logging(&path, level) {
                eprintln!("Warning: logging disabled: {e:#}");
            }
        } else {
            eprintln!("Warning: logging disabled: could not determine log file path");
        }
    }
    info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let store = config.high_score_store();
    let high_score = store.load();
    match store.path() {
        Some(p) => info!("Loaded high score {high_score} from {}", p.display()),
        None => info!("No high score file available"),
    }
    Ok(Globals {
        presets: config.presets,
        difficulty: args.difficulty.unwrap_or(config.difficulty),
        high_score,
        store,
    })
}

fn init_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to install logger")?;
    Ok(())
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
