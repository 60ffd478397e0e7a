use super::status_code::{self, MISSING_OCTICON};
use crate::{glyphs, path, util};
use std::path::{Path, PathBuf};

/// `"  •  "`, the default gap between a file name and its directory.
pub const DEFAULT_PATH_SEPARATOR: &str = "  \u{2022}  ";

/// Anything carrying a status code and a repository-relative file name.
pub trait PathStatus {
    fn status(&self) -> char;
    fn file_name(&self) -> &Path;
    fn original_file_name(&self) -> Option<&Path>;
}

/// A single changed path, with its staged (index) and unstaged (work tree) codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFile {
    pub repo_path: PathBuf,
    pub index_status: Option<char>,
    pub work_tree_status: Option<char>,
    pub file_name: PathBuf,
    pub original_file_name: Option<PathBuf>,
}

/// How [`StatusFile::with`] treats one optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Change<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T: Clone> Change<T> {
    fn apply(self, current: &Option<T>) -> Option<T> {
        match self {
            Change::Keep => current.clone(),
            Change::Clear => None,
            Change::Set(value) => Some(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFileChanges {
    pub index_status: Change<char>,
    pub work_tree_status: Change<char>,
    /// Replaces the file name when set to a non-empty path.
    pub file_name: Option<PathBuf>,
    pub original_file_name: Change<PathBuf>,
}

impl StatusFile {
    pub fn new(
        repo_path: impl Into<PathBuf>,
        index_status: Option<char>,
        work_tree_status: Option<char>,
        file_name: impl Into<PathBuf>,
        original_file_name: Option<PathBuf>,
    ) -> Self {
        Self {
            repo_path: repo_path.into(),
            index_status,
            work_tree_status,
            file_name: file_name.into(),
            original_file_name,
        }
    }

    /// Builds an entry from a two-character `XY` code, where `.` or a space
    /// means the side is unchanged.
    pub fn from_porcelain_code(
        repo_path: impl Into<PathBuf>,
        code: [char; 2],
        file_name: impl Into<PathBuf>,
        original_file_name: Option<PathBuf>,
    ) -> Self {
        let side = |c: char| match c {
            '.' | ' ' => None,
            c => Some(c),
        };

        Self::new(
            repo_path,
            side(code[0]),
            side(code[1]),
            file_name,
            original_file_name,
        )
    }

    /// The staged code wins. Falls back to `?` when neither side is set.
    pub fn status(&self) -> char {
        self.index_status.or(self.work_tree_status).unwrap_or('?')
    }

    pub fn staged(&self) -> bool {
        self.index_status.is_some()
    }

    pub fn uri(&self) -> PathBuf {
        path::resolve_absolute(&self.repo_path, &self.file_name)
    }

    pub fn is_untracked(&self) -> bool {
        self.index_status.is_none() && self.work_tree_status == Some('?')
    }

    pub fn is_conflicted(&self) -> bool {
        matches!(
            (self.index_status, self.work_tree_status),
            (Some('U'), _)
                | (_, Some('U'))
                | (Some('D'), Some('D'))
                | (Some('A'), Some('A'))
        )
    }

    pub fn formatted_directory(&self, include_original: bool) -> String {
        formatted_directory(self, include_original, None)
    }

    pub fn formatted_path(&self, separator: &str) -> String {
        formatted_path(self, separator, None)
    }

    pub fn octicon(&self) -> &'static str {
        status_code::octicon(self.status(), MISSING_OCTICON)
    }

    pub fn icon(&self) -> &'static str {
        icon(self)
    }

    pub fn status_text(&self) -> &'static str {
        status_text(self)
    }

    /// Returns a copy with `changes` applied. `self` is left untouched.
    pub fn with(&self, changes: StatusFileChanges) -> Self {
        Self {
            repo_path: self.repo_path.clone(),
            index_status: changes.index_status.apply(&self.index_status),
            work_tree_status: changes.work_tree_status.apply(&self.work_tree_status),
            file_name: changes
                .file_name
                .filter(|name| !name.as_os_str().is_empty())
                .unwrap_or_else(|| self.file_name.clone()),
            original_file_name: changes
                .original_file_name
                .apply(&self.original_file_name),
        }
    }
}

impl PathStatus for StatusFile {
    fn status(&self) -> char {
        StatusFile::status(self)
    }

    fn file_name(&self) -> &Path {
        &self.file_name
    }

    fn original_file_name(&self) -> Option<&Path> {
        self.original_file_name.as_deref()
    }
}

/// Directory of the file. Renames get `dir ← original` when `include_original` is set.
pub fn formatted_directory(
    item: &impl PathStatus,
    include_original: bool,
    relative_to: Option<&Path>,
) -> String {
    let directory = path::directory(item.file_name(), relative_to);

    match item.original_file_name() {
        Some(original) if include_original && item.status() == 'R' => {
            let original = path::to_slash(original);
            if directory.is_empty() {
                format!("{} {original}", glyphs::ARROW_LEFT)
            } else {
                format!("{directory}{}{original}", util::pad(glyphs::ARROW_LEFT, 1, 1))
            }
        }
        _ => directory,
    }
}

pub fn formatted_path(
    item: &impl PathStatus,
    separator: &str,
    relative_to: Option<&Path>,
) -> String {
    path::formatted_path(item.file_name(), separator, relative_to)
}

pub fn relative_path(item: &impl PathStatus, relative_to: Option<&Path>) -> String {
    path::relative_path(item.file_name(), relative_to)
}

pub fn octicon<'a>(item: &impl PathStatus, missing: &'a str) -> &'a str {
    status_code::octicon(item.status(), missing)
}

pub fn icon(item: &impl PathStatus) -> &'static str {
    status_code::icon(item.status())
}

pub fn status_text(item: &impl PathStatus) -> &'static str {
    status_code::text(item.status())
}
