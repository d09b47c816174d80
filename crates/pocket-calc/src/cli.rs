//! Command-line arguments using clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{AppConfig, Verbosity};
use crate::error::AppResult;
use crate::theme::Theme;

/// pocket-calc: a chained calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start-up theme (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Ignore mouse clicks on the keypad
    #[arg(long)]
    pub no_mouse: bool,
}

/// Theme argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    /// Light background
    Light,
    /// Dark background
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

impl Cli {
    /// Verbosity requested on the command line, if any
    #[must_use]
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            return Some(Verbosity::Quiet);
        }
        match self.verbose {
            0 => None,
            1 => Some(Verbosity::Verbose),
            _ => Some(Verbosity::Debug),
        }
    }
}

/// Builds the effective configuration: config file first, flags on top
pub fn build_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(theme) = cli.theme {
        config = config.with_theme(theme.into());
    }
    if cli.no_mouse {
        config = config.with_mouse(false);
    }
    if let Some(verbosity) = cli.verbosity() {
        config = config.with_verbosity(verbosity);
    }
    Ok(config)
}
