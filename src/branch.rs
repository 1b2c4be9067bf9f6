use crate::bzr::commands::LogOptions;
use crate::bzr::{self, BzrCli, CommandRunner};
use crate::commit::Commit;
use crate::error::{BzrError, Result};
use crate::history::Log;
use crate::info::BranchInfo;
use once_cell::unsync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

/// A bzr branch on disk.
///
/// The version-info is read when the branch is opened; the log is read on
/// first use and kept for the lifetime of the value.
#[derive(Debug)]
pub struct Branch<R: CommandRunner = BzrCli> {
    path: PathBuf,
    info: BranchInfo,
    log: OnceCell<Log>,
    runner: R,
}

impl Branch<BzrCli> {
    /// Opens the branch at `path` using the default `bzr` executable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_runner(path, BzrCli::default())
    }
}

impl<R: CommandRunner> Branch<R> {
    pub fn with_runner(path: impl Into<PathBuf>, runner: R) -> Result<Self> {
        let path = path.into();

        check_readable(&path)?;
        bzr::check_branch(&runner, &path)?;
        let info = bzr::version_info(&runner, &path)?;
        log::debug!("Opened branch {}: {}", path.display(), info);

        Ok(Self {
            path,
            info,
            log: OnceCell::new(),
            runner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self) -> &BranchInfo {
        &self.info
    }

    /// The full forward log, read on first call.
    pub fn log(&self) -> Result<&Log> {
        self.log
            .get_or_try_init(|| bzr::fetch_log(&self.runner, &self.path, &LogOptions::default()))
    }

    /// Reads the log with custom options. The result is not cached.
    pub fn log_with(&self, options: &LogOptions) -> Result<Log> {
        bzr::fetch_log(&self.runner, &self.path, options)
    }

    /// The last `n` commits of [`Branch::log`], in log order.
    ///
    /// Asking for more commits than exist returns the whole log.
    pub fn last_commits(&self, n: usize) -> Result<&[Commit]> {
        Ok(self.log()?.last(n))
    }

    /// Calls `f` with each of the last `n` commits.
    pub fn for_each_last_commit<F>(&self, n: usize, f: F) -> Result<()>
    where
        F: FnMut(&Commit),
    {
        self.last_commits(n)?.iter().for_each(f);
        Ok(())
    }
}

fn check_readable(path: &Path) -> Result<()> {
    let path_error = |reason: String| BzrError::Path {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = fs::metadata(path).map_err(|e| path_error(e.to_string()))?;
    if metadata.is_dir() {
        fs::read_dir(path).map_err(|e| path_error(e.to_string()))?;
    } else {
        fs::File::open(path).map_err(|e| path_error(e.to_string()))?;
    }
    Ok(())
}
