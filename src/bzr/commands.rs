use crate::error::{BzrError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

static RANGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?\d+)\s*\.\.\s*(-?\d+)?\s*$").unwrap());

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Direction and revision range for `bzr log`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// Oldest commit first
    pub forward: bool,
    pub start: i64,
    /// `-1` means through the latest revision
    pub end: i64,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            forward: true,
            start: 1,
            end: -1,
        }
    }
}

impl LogOptions {
    pub fn with_forward(mut self, forward: bool) -> Self {
        self.forward = forward;
        self
    }

    pub fn with_range(mut self, start: i64, end: i64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Arguments for the `bzr` executable.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["log".to_string()];
        if self.forward {
            args.push("--forward".to_string());
        }
        args.push(format!("-r{}..{}", self.start, self.end));
        args
    }
}

/// Parses `START..END`; a missing end means `-1`.
pub fn parse_range(range: &str) -> Result<(i64, i64)> {
    let captures = RANGE_REGEX
        .captures(range)
        .ok_or_else(|| BzrError::InvalidRange(range.to_string()))?;

    let parse = |text: &str| {
        text.parse::<i64>()
            .map_err(|_| BzrError::InvalidRange(range.to_string()))
    };

    let start = parse(&captures[1])?;
    let end = match captures.get(2) {
        Some(end) => parse(end.as_str())?,
        None => -1,
    };

    if start == 0 || end == 0 {
        return Err(BzrError::InvalidRange(range.to_string()));
    }

    Ok((start, end))
}

/// Executes a bzr command and returns its stdout.
///
/// The child is killed if it has not exited within `timeout`, and reading
/// its output is bound by the same deadline.
pub fn run_bzr_command(
    program: &Path,
    args: &[String],
    dir: &Path,
    timeout: Duration,
) -> Result<String> {
    let command = format!("{} {}", program.display(), args.join(" "));
    log::debug!("Running `{}` in {}", command, dir.display());

    let mut child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| BzrError::CommandFailed {
            command: command.clone(),
            output: e.to_string(),
        })?;

    let deadline = Instant::now() + timeout;
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = wait_with_deadline(&mut child, deadline, timeout, &command)?;

    // A background process may still hold the pipes after bzr itself exited.
    let stdout = collect_output(stdout, deadline, timeout, &command)?;
    let stderr = collect_output(stderr, deadline, timeout, &command)?;

    if !status.success() {
        return Err(BzrError::CommandFailed {
            command,
            output: stderr,
        });
    }

    Ok(stdout)
}

fn timed_out(command: &str, timeout: Duration) -> BzrError {
    BzrError::CommandTimeout {
        command: command.to_string(),
        timeout,
    }
}

fn wait_with_deadline(
    child: &mut Child,
    deadline: Instant,
    timeout: Duration,
    command: &str,
) -> Result<ExitStatus> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() > deadline {
            log::warn!("Killing `{}` after {:?}", command, timeout);
            let _ = child.kill();
            let _ = child.wait();
            return Err(timed_out(command, timeout));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Reads a pipe to the end on a helper thread so the child never blocks on a full pipe.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<Receiver<Vec<u8>>> {
    pipe.map(|mut pipe| {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = pipe.read_to_end(&mut buffer);
            let _ = tx.send(buffer);
        });
        rx
    })
}

fn collect_output(
    output: Option<Receiver<Vec<u8>>>,
    deadline: Instant,
    timeout: Duration,
    command: &str,
) -> Result<String> {
    let Some(output) = output else {
        return Ok(String::new());
    };

    let remaining = deadline.saturating_duration_since(Instant::now());
    match output.recv_timeout(remaining) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(RecvTimeoutError::Timeout) => {
            log::warn!("Output of `{}` still open after {:?}", command, timeout);
            Err(timed_out(command, timeout))
        }
        Err(RecvTimeoutError::Disconnected) => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_args() {
        assert_eq!(LogOptions::default().to_args(), vec!["log", "--forward", "-r1..-1"]);
    }

    #[test]
    fn test_reverse_range_args() {
        let options = LogOptions::default().with_forward(false).with_range(3, 7);
        assert_eq!(options.to_args(), vec!["log", "-r3..7"]);
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1..-1").unwrap(), (1, -1));
        assert_eq!(parse_range("3..").unwrap(), (3, -1));
        assert_eq!(parse_range(" 2..5 ").unwrap(), (2, 5));
        assert_eq!(parse_range("-3..-1").unwrap(), (-3, -1));
    }

    #[test]
    fn test_parse_range_rejects_garbage() {
        for bad in ["", "1", "a..b", "1...3", "0..4", "99999999999999999999..1"] {
            assert!(
                matches!(parse_range(bad), Err(BzrError::InvalidRange(_))),
                "should reject {:?}",
                bad
            );
        }
    }
}
