use crate::commit::Commit;
use serde::Serialize;

/// The history of a branch as an ordered list of commits.
///
/// Commits are kept in the order `bzr log` printed them; with `--forward`
/// that is oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Log {
    commits: Vec<Commit>,
}

impl Log {
    pub fn new(commits: Vec<Commit>) -> Self {
        Self { commits }
    }

    pub fn count(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Commit> {
        self.commits.iter()
    }

    /// Iterates over all commits in stored order.
    pub fn each_entry(&self) -> impl Iterator<Item = &Commit> + '_ {
        self.iter()
    }

    /// The final `n` commits in stored order, clamped to the whole log.
    pub fn last(&self, n: usize) -> &[Commit] {
        let start = self.commits.len().saturating_sub(n);
        &self.commits[start..]
    }
}

impl<'a> IntoIterator for &'a Log {
    type Item = &'a Commit;
    type IntoIter = std::slice::Iter<'a, Commit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Commit>> for Log {
    fn from(commits: Vec<Commit>) -> Self {
        Self::new(commits)
    }
}
