use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dom_dojo::content::{self, Mode};
use dom_dojo::{App, Catalogs, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dom-dojo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file to use instead of the built-in lessons
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    /// Color theme: dark or light
    #[arg(short, long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the lessons for one mode
    Show {
        /// learning, techniques or quiz
        #[arg(value_parser = parse_mode)]
        mode: Mode,
    },
    /// Validate a catalog file
    Check {
        /// Path to the catalog JSON file
        path: PathBuf,
    },
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::parse(s)
        .ok_or_else(|| format!("unknown mode '{}' (expected learning, techniques or quiz)", s))
}

/// Send logs to a file so they don't draw over the TUI
fn init_logging() -> Result<()> {
    let log_path = Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dom_dojo=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

/// Load the catalog file if one was given, otherwise the built-in lessons
fn load_catalogs(path: Option<&Path>) -> Result<Catalogs> {
    match path {
        Some(path) => Catalogs::load(path)
            .with_context(|| format!("Failed to load lessons from {:?}", path)),
        None => Ok(Catalogs::builtin()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("warning: logging disabled: {:#}", e);
    }

    match cli.command {
        Some(Commands::Show { mode }) => {
            let config = Config::load()?;
            let path = cli.content.or(config.content_path);
            let catalogs = load_catalogs(path.as_deref())?;
            println!("{}\n", mode.title());
            println!("{}", content::listing(&catalogs, mode));
        }
        Some(Commands::Check { path }) => {
            let catalogs = load_catalogs(Some(&path))?;
            println!("{:?} is a valid catalog", path);
            for mode in Mode::ALL {
                println!("  {:<12}{} items", mode.key(), catalogs.len_of(mode));
            }
        }
        None => {
            let mut config = Config::load()?;
            if let Some(theme) = cli.theme {
                config.override_theme(theme);
            }
            let path = cli.content.or_else(|| config.content_path.clone());
            let catalogs = load_catalogs(path.as_deref())?;

            let mut app = App::new(&config, catalogs)?;
            app.run()?;
        }
    }

    Ok(())
}
