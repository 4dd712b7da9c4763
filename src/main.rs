//! phocus - block distracting domains while you focus
//!
//! Parses the command line, checks privileges, loads configuration and sets
//! up file logging, then hands over to [`app::run`].

mod app;

use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use phocus::config::loader::{ConfigLoader, SkippedConfig};
use phocus::config::LoggingConfig;
use phocus::platform::{Platform, PrivilegeOps};
use phocus::{Config, Error, Result};

/// Environment variable naming a configuration file
const CONFIG_ENV: &str = "PHOCUS_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "phocus", version)]
#[command(about = "Block distracting domains through the hosts file while you focus")]
struct Cli {
    /// Path to configuration file (or set PHOCUS_CONFIG)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Write logs here instead of the configured log file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_default_config {
        return match Config::default().to_toml() {
            Ok(text) => {
                print!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    // Checked before anything can touch the hosts file
    if let Err(e) = check_privileges(Platform::privileges().as_ref()) {
        eprintln!("Error: {}", e);
        eprintln!("Please run it with sudo.");
        return ExitCode::FAILURE;
    }

    let loaded = match load_configuration(config_override(&cli), ConfigLoader::new()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Shown before the UI takes over the screen, and logged once tracing is up
    for skipped in &loaded.skipped {
        eprintln!(
            "Warning: ignoring config file {}: {}",
            skipped.path.display(),
            skipped.error
        );
    }

    let log_path = init_tracing(&cli, &loaded.config.logging);

    info!("Starting {} v{}", phocus::NAME, phocus::VERSION);
    for skipped in &loaded.skipped {
        warn!("Ignored config file {}: {}", skipped.path.display(), skipped.error);
    }
    match &loaded.path {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => debug!("Using default configuration"),
    }
    if let Some(path) = log_path {
        debug!("Logging to {}", path.display());
    }

    app::run(loaded.config)
}

/// Fail with [`Error::PrivilegeRequired`] unless the process may edit the
/// hosts file
fn check_privileges(privileges: &dyn PrivilegeOps) -> Result<()> {
    if privileges.is_elevated() {
        Ok(())
    } else {
        Err(Error::PrivilegeRequired)
    }
}

/// Configuration plus where it came from
struct LoadedConfig {
    config: Config,
    path: Option<PathBuf>,
    /// Searched files that could not be used
    skipped: Vec<SkippedConfig>,
}

/// The config file named by --config or $PHOCUS_CONFIG, in that order
fn config_override(cli: &Cli) -> Option<PathBuf> {
    cli.config
        .clone()
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
}

/// Load the named configuration file, or search for one
fn load_configuration(explicit: Option<PathBuf>, mut loader: ConfigLoader) -> Result<LoadedConfig> {
    let config = match explicit {
        Some(path) => loader.load_from_path(&path)?,
        None => loader.load()?,
    };

    let path = loader.current_path().map(Path::to_path_buf);
    let skipped = loader.take_skipped();
    Ok(LoadedConfig {
        config,
        path,
        skipped,
    })
}

/// Install the global subscriber, writing to a log file so the terminal UI
/// stays clean. Returns the log file in use, if any.
fn init_tracing(cli: &Cli, logging: &LoggingConfig) -> Option<PathBuf> {
    let log_level = if cli.debug {
        "debug".to_string()
    } else {
        logging.level.to_lowercase()
    };
    let env_filter = env::var("RUST_LOG").unwrap_or(log_level);

    let path = cli
        .log_file
        .clone()
        .or_else(|| logging.file.clone())
        .or_else(default_log_path);

    let file = path.as_deref().and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(e) => {
            // No subscriber yet, and the UI owns the screen shortly
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            None
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from(env_filter))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false);

    match file {
        Some(file) => {
            builder.with_writer(Mutex::new(file)).init();
            path
        }
        None => {
            builder.with_writer(std::io::sink).init();
            None
        }
    }
}

fn default_log_path() -> Option<PathBuf> {
    Platform::paths()
        .cache_dir()
        .ok()
        .map(|dir| dir.join("phocus").join("phocus.log"))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
