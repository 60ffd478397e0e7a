use super::{branch, status_file::PathStatus};
use std::path::{Path, PathBuf};

/// A file touched by a commit, as listed in a log or a commit details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFile {
    pub sha: String,
    pub status: char,
    pub file_name: PathBuf,
    pub original_file_name: Option<PathBuf>,
}

impl CommitFile {
    pub fn short_sha(&self) -> &str {
        branch::short_sha(&self.sha)
    }
}

impl PathStatus for CommitFile {
    fn status(&self) -> char {
        self.status
    }

    fn file_name(&self) -> &Path {
        &self.file_name
    }

    fn original_file_name(&self) -> Option<&Path> {
        self.original_file_name.as_deref()
    }
}
