//! Trackcut - split full-album recordings into tracks.
//!
//! A pasted track list (`01. Intro - 0:00`, ...) is parsed into records,
//! validated into a [`plan`] of cuts, and run through an external cutter.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod output;
pub mod plan;
pub mod segmenter;
pub mod timeline;
pub mod tracklist;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::{
    Config, OutputMode, config_file_path, load_default_config, save_default_config,
    validate_config,
};
use output::{AlbumTitlePayload, ConfigPayload, ResultType, emit_json_result};
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for trackcut CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = load_default_config()?;
    validate_config(&config)?;

    let output_mode = cli.output_mode();
    handle_command(cli.command, &config, output_mode, !cli.quiet)
}

/// Initialize logging based on verbosity. Logs go to stderr so stdout only
/// carries command results.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(
    command: Command,
    config: &Config,
    output_mode: OutputMode,
    show_progress: bool,
) -> Result<()> {
    match command {
        Command::Split(args) => {
            segmenter::command::execute(&args, config, output_mode, show_progress)
        }
        Command::Title { title } => handle_title_command(title, output_mode),
        Command::Tags(args) => metadata::command::execute(&args, output_mode),
        Command::Config { action } => handle_config_command(action, output_mode),
    }
}

fn handle_title_command(title: String, output_mode: OutputMode) -> Result<()> {
    let fields = tracklist::parse_album_title(&title);
    debug!("Parsed album title '{title}': {fields:?}");

    if output_mode.is_structured() {
        return emit_json_result(&AlbumTitlePayload {
            result_type: ResultType::AlbumTitle,
            title,
            fields,
        });
    }

    if fields.is_empty() {
        println!("No album fields recognized in '{title}'");
        return Ok(());
    }

    for (label, value) in [
        ("artist", &fields.artist),
        ("album", &fields.album),
        ("year", &fields.year),
    ] {
        if let Some(value) = value {
            println!("{label}: {value}");
        }
    }
    Ok(())
}

fn handle_config_command(action: ConfigAction, output_mode: OutputMode) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            if output_mode.is_structured() {
                let value = serde_json::to_value(&config)
                    .map_err(|e| Error::JsonSerialize { source: e })?;
                return emit_json_result(&ConfigPayload {
                    result_type: ResultType::Config,
                    config_path: config_file_path()?,
                    config: value,
                });
            }
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
