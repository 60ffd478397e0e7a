//! Display tables for the single-character status codes git reports per file.
//!
//! Every table is an exhaustive match over [`StatusCode`]. Lookups by raw
//! `char` fall back to a fixed value for anything outside the known set.

use strum::EnumIter;

/// Glyph used when a code has no octicon. Keeps columns aligned.
pub const MISSING_OCTICON: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum StatusCode {
    Ignored,
    Untracked,
    Added,
    Copied,
    Deleted,
    Modified,
    Renamed,
    TypeChanged,
    Conflicted,
    Unknown,
    Broken,
}

impl StatusCode {
    pub const fn from_char(code: char) -> Option<Self> {
        Some(match code {
            '!' => Self::Ignored,
            '?' => Self::Untracked,
            'A' => Self::Added,
            'C' => Self::Copied,
            'D' => Self::Deleted,
            'M' => Self::Modified,
            'R' => Self::Renamed,
            'T' => Self::TypeChanged,
            'U' => Self::Conflicted,
            'X' => Self::Unknown,
            'B' => Self::Broken,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Ignored => '!',
            Self::Untracked => '?',
            Self::Added => 'A',
            Self::Copied => 'C',
            Self::Deleted => 'D',
            Self::Modified => 'M',
            Self::Renamed => 'R',
            Self::TypeChanged => 'T',
            Self::Conflicted => 'U',
            Self::Unknown => 'X',
            Self::Broken => 'B',
        }
    }

    pub const fn octicon(self) -> &'static str {
        match self {
            Self::Ignored => "$(diff-ignored)",
            Self::Untracked | Self::Added | Self::Copied => "$(diff-added)",
            Self::Deleted => "$(diff-removed)",
            Self::Modified | Self::TypeChanged => "$(diff-modified)",
            Self::Renamed => "$(diff-renamed)",
            Self::Conflicted => "$(alert)",
            Self::Unknown | Self::Broken => "$(question)",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Ignored => "icon-status-ignored.svg",
            Self::Untracked => "icon-status-untracked.svg",
            Self::Added => "icon-status-added.svg",
            Self::Copied => "icon-status-copied.svg",
            Self::Deleted => "icon-status-deleted.svg",
            Self::Modified | Self::TypeChanged => "icon-status-modified.svg",
            Self::Renamed => "icon-status-renamed.svg",
            Self::Conflicted => "icon-status-conflict.svg",
            Self::Unknown | Self::Broken => "icon-status-unknown.svg",
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Untracked => "untracked",
            Self::Added => "added",
            Self::Copied => "copied",
            Self::Deleted => "deleted",
            Self::Modified | Self::TypeChanged => "modified",
            Self::Renamed => "renamed",
            Self::Conflicted => "conflict",
            Self::Unknown | Self::Broken => "unknown",
        }
    }
}

pub fn octicon(code: char, missing: &str) -> &str {
    match StatusCode::from_char(code) {
        Some(code) => code.octicon(),
        None => missing,
    }
}

pub fn icon(code: char) -> &'static str {
    StatusCode::from_char(code)
        .unwrap_or(StatusCode::Unknown)
        .icon()
}

pub fn text(code: char) -> &'static str {
    StatusCode::from_char(code)
        .unwrap_or(StatusCode::Unknown)
        .text()
}
