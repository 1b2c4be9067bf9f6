use crate::error::{BzrError, Result};
use crate::timestamp::parse_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Keys `bzr version-info` must report, in the order they are checked.
pub const REQUIRED_KEYS: [&str; 4] = ["date", "revno", "branch-nick", "revision-id"];

/// Status information of a branch, built from `bzr version-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchInfo {
    /// Date of the last commit
    pub date: DateTime<FixedOffset>,
    /// Latest revision number
    pub revno: String,
    pub branch_nick: String,
    pub revision_id: String,
}

impl BranchInfo {
    /// Builds the info from `key: value` lines.
    ///
    /// Lines are split on the first colon only, so values may contain colons.
    /// Lines without any colon are skipped.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let fields: HashMap<&str, &str> = lines
            .iter()
            .filter_map(|line| line.as_ref().split_once(':'))
            .map(|(key, value)| (key.trim(), value.trim()))
            .collect();

        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !fields.contains_key(*key)) {
            return Err(BzrError::MissingField {
                field: missing.to_string(),
            });
        }

        Ok(Self {
            date: parse_timestamp(fields["date"])?,
            revno: fields["revno"].to_string(),
            branch_nick: fields["branch-nick"].to_string(),
            revision_id: fields["revision-id"].to_string(),
        })
    }
}

impl fmt::Display for BranchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "revision: {} | date: {} | branch-nick: {} | revision-id: {}",
            self.revno, self.date, self.branch_nick, self.revision_id
        )
    }
}
