//! Parsing of `bzr log` output.
//!
//! The log is printed as a sequence of blocks, each introduced by a line of
//! sixty dashes. A block holds `label: value` lines plus a `message:` marker
//! whose text sits, indented, on the following line:
//!
//! ```text
//! ------------------------------------------------------------
//! revno: 2
//! committer: rp <rp@dwarf>
//! branch nick: rubzr
//! timestamp: Tue 2007-08-21 16:58:29 +0200
//! message:
//!   log-parsing...
//! ```

use crate::commit::Commit;
use crate::history::Log;
use std::iter;
use std::ops::Range;

/// Line separating two commits in `bzr log` output.
pub const SEPARATOR: &str = "------------------------------------------------------------";

const MESSAGE_MARKER: &str = "message:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Revno,
    Committer,
    BranchNick,
    Timestamp,
    Merged,
}

/// Labels recognized in a block, after `branch nick` has been normalized.
const FIELD_LABELS: &[(&str, Field)] = &[
    ("revno", Field::Revno),
    ("committer", Field::Committer),
    ("branch_nick", Field::BranchNick),
    ("timestamp", Field::Timestamp),
    ("merged", Field::Merged),
];

impl Field {
    fn lookup(label: &str) -> Option<Self> {
        FIELD_LABELS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, field)| *field)
    }

    fn slot(self, commit: &mut Commit) -> &mut Option<String> {
        match self {
            Field::Revno => &mut commit.revno,
            Field::Committer => &mut commit.committer,
            Field::BranchNick => &mut commit.branch_nick,
            Field::Timestamp => &mut commit.timestamp,
            Field::Merged => &mut commit.merged,
        }
    }
}

fn is_separator(line: &str) -> bool {
    line.trim() == SEPARATOR
}

/// Indices of all separator lines.
pub fn separator_offsets<S: AsRef<str>>(lines: &[S]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_separator(line.as_ref()))
        .map(|(index, _)| index)
        .collect()
}

/// Turns separator offsets into one range per commit.
///
/// Each range starts at a separator and ends at the next one; the last range
/// runs to `len`. Anything before the first separator is not covered.
pub fn block_ranges(offsets: &[usize], len: usize) -> Vec<Range<usize>> {
    let ends = offsets.iter().skip(1).copied().chain(iter::once(len));
    offsets.iter().zip(ends).map(|(&start, end)| start..end).collect()
}

/// Splits log output into per-commit blocks.
///
/// Separator lines are removed from every block and blocks without any
/// non-blank line (such as a trailing separator) are dropped.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<&str>> {
    let offsets = separator_offsets(lines);

    block_ranges(&offsets, lines.len())
        .into_iter()
        .map(|range| {
            lines[range]
                .iter()
                .map(|line| line.as_ref())
                .filter(|line| !is_separator(line))
                .collect::<Vec<&str>>()
        })
        .filter(|block| block.iter().any(|line| !line.trim().is_empty()))
        .collect()
}

fn indent(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Extracts a commit from one block. Returns `None` if the block contains
/// no recognized field at all.
///
/// The message is the first line after the `message:` marker. Further lines
/// indented deeper than the marker (and blank lines) belong to the message
/// body and are never matched as fields.
pub fn parse_commit(block: &[&str]) -> Option<Commit> {
    let mut commit = Commit::default();
    let mut recognized = false;
    let mut lines = block.iter().peekable();

    while let Some(raw) = lines.next() {
        let line = raw.trim();

        if line.starts_with(MESSAGE_MARKER) {
            recognized = true;
            let depth = indent(raw);
            if let Some(text) = lines.next() {
                commit.message = Some(text.trim().to_string());
            }
            while lines
                .next_if(|next| next.trim().is_empty() || indent(next) > depth)
                .is_some()
            {}
            continue;
        }

        let normalized;
        let line = match line.strip_prefix("branch nick:") {
            Some(rest) => {
                normalized = format!("branch_nick:{}", rest);
                normalized.as_str()
            }
            None => line,
        };

        let Some((label, value)) = line.split_once(':') else {
            continue;
        };

        if let Some(field) = Field::lookup(label) {
            *field.slot(&mut commit) = Some(value.trim().to_string());
            recognized = true;
        }
    }

    recognized.then_some(commit)
}

/// Parses complete `bzr log` output.
///
/// A block that cannot be turned into a commit is skipped; a commit missing
/// identity fields is kept and reported.
pub fn parse_log<S: AsRef<str>>(lines: &[S]) -> Log {
    let mut commits = Vec::new();

    for (index, block) in segment(lines).iter().enumerate() {
        match parse_commit(block) {
            Some(commit) => {
                if !commit.is_complete() {
                    log::warn!(
                        "Log entry {} is missing fields: {}",
                        index,
                        commit.missing_fields().join(", ")
                    );
                }
                commits.push(commit);
            }
            None => log::debug!("Skipping log entry {} without known fields", index),
        }
    }

    log::debug!("Parsed {} commits from {} lines", commits.len(), lines.len());
    Log::new(commits)
}
