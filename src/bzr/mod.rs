pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::error::{BzrError, Result};
use crate::history::Log;
use crate::info::BranchInfo;
use commands::{run_bzr_command, LogOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runs a bzr subcommand in a directory and hands back its output lines.
pub trait CommandRunner {
    fn run(&self, args: &[String], dir: &Path) -> Result<Vec<String>>;
}

/// [`CommandRunner`] backed by the real `bzr` executable.
#[derive(Debug, Clone)]
pub struct BzrCli {
    program: PathBuf,
    timeout: Duration,
}

impl BzrCli {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.bzr_path, config.timeout())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for BzrCli {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl CommandRunner for BzrCli {
    fn run(&self, args: &[String], dir: &Path) -> Result<Vec<String>> {
        let stdout = run_bzr_command(&self.program, args, dir, self.timeout)?;
        Ok(stdout.lines().map(str::to_string).collect())
    }
}

fn version_info_args() -> Vec<String> {
    vec!["version-info".to_string()]
}

/// Checks that `path` is a bzr branch.
pub fn check_branch<R: CommandRunner>(runner: &R, path: &Path) -> Result<()> {
    let not_a_branch = |reason: String| BzrError::NotABranch {
        path: path.to_path_buf(),
        reason,
    };

    match runner.run(&version_info_args(), path) {
        Ok(lines) if lines.is_empty() => Err(not_a_branch("no version-info output".to_string())),
        Ok(_) => Ok(()),
        Err(e @ BzrError::CommandFailed { .. }) | Err(e @ BzrError::CommandTimeout { .. }) => {
            Err(not_a_branch(e.to_string()))
        }
        Err(e) => Err(e),
    }
}

/// Reads `bzr version-info` for the branch at `path`.
pub fn version_info<R: CommandRunner>(runner: &R, path: &Path) -> Result<BranchInfo> {
    let lines = runner.run(&version_info_args(), path)?;
    BranchInfo::from_lines(&lines)
}

/// Reads and parses `bzr log` for the branch at `path`.
pub fn fetch_log<R: CommandRunner>(runner: &R, path: &Path, options: &LogOptions) -> Result<Log> {
    let lines = runner.run(&options.to_args(), path)?;
    Ok(parser::parse_log(&lines))
}
