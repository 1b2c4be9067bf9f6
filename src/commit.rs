use crate::error::{BzrError, Result};
use crate::timestamp::parse_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// A single commit as reported by `bzr log`.
///
/// Every field is optional because log output is parsed leniently; use
/// [`Commit::is_complete`] to check that the identity fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub revno: Option<String>,
    pub committer: Option<String>,
    pub branch_nick: Option<String>,
    /// Raw timestamp text, see [`Commit::time`].
    pub timestamp: Option<String>,
    /// First line of the commit message, trimmed.
    pub message: Option<String>,
    pub merged: Option<String>,
}

impl Commit {
    pub fn new(
        revno: Option<String>,
        committer: Option<String>,
        branch_nick: Option<String>,
        timestamp: Option<String>,
        message: Option<String>,
        merged: Option<String>,
    ) -> Self {
        Self {
            revno,
            committer,
            branch_nick,
            timestamp,
            message,
            merged,
        }
    }

    /// Parses the raw timestamp of this commit.
    pub fn time(&self) -> Result<DateTime<FixedOffset>> {
        let raw = self.timestamp.as_deref().ok_or_else(|| BzrError::MissingField {
            field: "timestamp".to_string(),
        })?;
        parse_timestamp(raw)
    }

    /// Names of the identity fields this commit lacks.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.revno.is_none() {
            missing.push("revno");
        }
        if self.committer.is_none() {
            missing.push("committer");
        }
        if self.branch_nick.is_none() {
            missing.push("branch_nick");
        }
        if self.timestamp.is_none() {
            missing.push("timestamp");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.merged.is_some()
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.revno.as_deref().unwrap_or("?"),
            self.timestamp.as_deref().unwrap_or("?"),
            self.committer.as_deref().unwrap_or("?"),
            self.message.as_deref().unwrap_or("")
        )
    }
}
