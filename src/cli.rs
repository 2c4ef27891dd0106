//! Command line arguments

use crate::report::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "sys-stat")]
#[command(version, about = "Report process resource usage for every member of a group")]
pub struct Cli {
    /// Output format of the user stats
    #[arg(value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,

    /// TOML file overriding the external command templates
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
