use crate::bzr::commands::{parse_range, LogOptions};
use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bzrwrapper",
    version,
    about = "Extract version-info and commit history from bazaar branches",
    long_about = None
)]
pub struct Args {
    /// Branch directory (defaults to the current directory)
    #[arg(short = 'C', long = "branch", value_name = "DIR", global = true)]
    pub branch_path: Option<PathBuf>,

    /// bzr executable to run
    #[arg(long = "bzr", value_name = "PATH", env = "BZRWRAPPER_BZR", global = true)]
    pub bzr_path: Option<PathBuf>,

    /// Seconds a single bzr command may take
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Config file (defaults to <config dir>/bzrwrapper/config.toml)
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_path: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the branch version-info
    Info,
    /// Show the commit log
    Log {
        /// Newest commit first
        #[arg(long = "reverse")]
        reverse: bool,

        /// Revision range START..END (END -1 or empty means latest)
        #[arg(short = 'r', long = "revision", value_name = "RANGE")]
        revision: Option<String>,
    },
    /// Show the last N commits
    Last {
        #[arg(value_name = "N")]
        count: usize,
    },
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == Some(0) {
            return Err("Timeout must be at least one second".to_string());
        }

        if let Commands::Log {
            revision: Some(range),
            ..
        } = &self.command
        {
            parse_range(range).map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Applies command line overrides on top of a loaded config.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(ref bzr) = self.bzr_path {
            config.bzr_path = bzr.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_secs = timeout;
        }
        config
    }

    /// Log options for the `log` subcommand, starting from the config defaults.
    pub fn log_options(&self, config: &Config) -> crate::Result<LogOptions> {
        let mut options = LogOptions::default().with_forward(config.forward);

        if let Commands::Log { reverse, revision } = &self.command {
            if *reverse {
                options = options.with_forward(false);
            }
            if let Some(range) = revision {
                let (start, end) = parse_range(range)?;
                options = options.with_range(start, end);
            }
        }

        Ok(options)
    }
}
