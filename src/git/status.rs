use super::{branch, status_file::StatusFile};
use crate::{config, glyphs, util};
use itertools::Itertools;
use serde::Deserialize;
use std::{path::PathBuf, sync::OnceLock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpstreamState {
    pub ahead: u32,
    pub behind: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffTally {
    pub added: usize,
    pub deleted: usize,
    pub changed: usize,
}

impl DiffTally {
    fn count(files: &[StatusFile]) -> Self {
        files
            .iter()
            .fold(Self::default(), |mut tally, file| {
                match file.status() {
                    'A' | '?' => tally.added += 1,
                    'D' => tally.deleted += 1,
                    _ => tally.changed += 1,
                }
                tally
            })
    }
}

/// Shared by [`RepositoryStatus::diff_status`] and the upstream summaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Returned as-is when there is nothing to report.
    #[serde(deserialize_with = "config::text")]
    pub empty: String,
    /// Sentences (`2 files added`) instead of symbols (`+2`).
    pub expand: bool,
    #[serde(deserialize_with = "config::text")]
    pub prefix: String,
    #[serde(deserialize_with = "config::text")]
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            empty: String::new(),
            expand: false,
            prefix: String::new(),
            separator: glyphs::SPACE.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn expanded(mut self) -> Self {
        self.expand = true;
        self
    }

    pub fn with_empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Status of a repository at HEAD: branch, upstream divergence and changed files.
///
/// Treat as immutable once built. The diff tally is computed on first use and
/// cached, so files pushed afterwards are not counted.
#[derive(Debug, Clone)]
pub struct RepositoryStatus {
    pub repo_path: PathBuf,
    branch: String,
    sha: String,
    pub files: Vec<StatusFile>,
    pub state: UpstreamState,
    pub upstream: Option<String>,
    detached: bool,
    diff_tally: OnceLock<DiffTally>,
}

impl RepositoryStatus {
    pub fn new(
        repo_path: impl Into<PathBuf>,
        branch: impl Into<String>,
        sha: impl Into<String>,
        files: Vec<StatusFile>,
        state: UpstreamState,
        upstream: Option<String>,
    ) -> Self {
        let sha = sha.into();
        let mut branch = branch.into();
        let detached = branch::is_detached(&branch);

        if detached {
            log::debug!("HEAD detached at {}", sha);
            branch = branch::format_detached(&sha);
        }

        Self {
            repo_path: repo_path.into(),
            branch,
            sha,
            files,
            state,
            upstream,
            detached,
            diff_tally: OnceLock::new(),
        }
    }

    /// The branch name, or `({short sha}...)` when detached. Empty when git
    /// reported no branch.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Full HEAD sha, empty before the first commit.
    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Something that can be checked out: the sha when detached, else the branch.
    pub fn reference(&self) -> &str {
        if self.detached { &self.sha } else { &self.branch }
    }

    pub fn has_changes(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn diff_tally(&self) -> DiffTally {
        *self.diff_tally.get_or_init(|| {
            log::trace!("Counting {} changed files", self.files.len());
            DiffTally::count(&self.files)
        })
    }

    pub fn diff_status(&self, options: &FormatOptions) -> String {
        if self.files.is_empty() {
            return options.empty.clone();
        }

        let DiffTally {
            added,
            deleted,
            changed,
        } = self.diff_tally();

        if options.expand {
            let clauses = [(added, "added"), (changed, "changed"), (deleted, "deleted")]
                .into_iter()
                .filter(|(count, _)| *count > 0)
                .map(|(count, verb)| format!("{} {verb}", util::pluralize("file", count)))
                .join(&options.separator);

            format!("{}{clauses}", options.prefix)
        } else {
            format!(
                "{prefix}+{added}{sep}~{changed}{sep}-{deleted}",
                prefix = options.prefix,
                sep = options.separator,
            )
        }
    }

    pub fn upstream_status(&self, options: &FormatOptions) -> String {
        Self::format_upstream_status(self.upstream.as_deref(), self.state, options)
    }

    pub fn format_upstream_status(
        upstream: Option<&str>,
        state: UpstreamState,
        options: &FormatOptions,
    ) -> String {
        let UpstreamState { ahead, behind } = state;

        if upstream.is_none() || (ahead == 0 && behind == 0) {
            return options.empty.clone();
        }

        if options.expand {
            let clauses = [(behind, "behind"), (ahead, "ahead")]
                .into_iter()
                .filter(|(count, _)| *count > 0)
                .map(|(count, direction)| {
                    format!("{} {direction}", util::pluralize("commit", count as usize))
                })
                .join(&options.separator);

            format!("{}{clauses}", options.prefix)
        } else {
            format!(
                "{prefix}{behind}{down}{sep}{ahead}{up}",
                prefix = options.prefix,
                down = glyphs::ARROW_DOWN,
                up = glyphs::ARROW_UP,
                sep = options.separator,
            )
        }
    }
}

impl PartialEq for RepositoryStatus {
    fn eq(&self, other: &Self) -> bool {
        self.repo_path == other.repo_path
            && self.branch == other.branch
            && self.sha == other.sha
            && self.files == other.files
            && self.state == other.state
            && self.upstream == other.upstream
            && self.detached == other.detached
    }
}

impl Eq for RepositoryStatus {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHA: &str = "1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b";

    fn file(status: char, name: &str) -> StatusFile {
        StatusFile::new("/repo", Some(status), None, name, None)
    }

    fn repo(files: Vec<StatusFile>) -> RepositoryStatus {
        RepositoryStatus::new(
            "/repo",
            "main",
            SHA,
            files,
            UpstreamState::default(),
            None,
        )
    }

    fn mixed() -> RepositoryStatus {
        repo(vec![
            file('A', "a.rs"),
            file('D', "b.rs"),
            file('M', "c.rs"),
            file('?', "d.rs"),
            file('D', "e.rs"),
        ])
    }

    #[test]
    fn tally() {
        assert_eq!(
            mixed().diff_tally(),
            DiffTally {
                added: 2,
                deleted: 2,
                changed: 1
            }
        );
    }

    #[test]
    fn tally_counts_by_display_status() {
        let status = repo(vec![
            StatusFile::new("/repo", None, Some('?'), "new.rs", None),
            StatusFile::new("/repo", Some('M'), Some('D'), "gone.rs", None),
            StatusFile::new("/repo", Some('R'), None, "moved.rs", Some("old.rs".into())),
            StatusFile::new("/repo", Some('U'), Some('U'), "both.rs", None),
        ]);

        assert_eq!(
            status.diff_tally(),
            DiffTally {
                added: 1,
                deleted: 0,
                changed: 3
            }
        );
    }

    #[test]
    fn compact_diff_status() {
        assert_eq!(mixed().diff_status(&FormatOptions::default()), "+2 ~1 -2");
        assert_eq!(
            mixed().diff_status(&FormatOptions::default().with_prefix("[").with_separator("|")),
            "[+2|~1|-2"
        );
    }

    #[test]
    fn compact_diff_status_keeps_zeros() {
        let status = repo(vec![file('M', "a.rs")]);
        assert_eq!(status.diff_status(&FormatOptions::default()), "+0 ~1 -0");
    }

    #[test]
    fn expanded_diff_status() {
        assert_eq!(
            mixed().diff_status(&FormatOptions::default().expanded()),
            "2 files added 1 file changed 2 files deleted"
        );
        assert_eq!(
            mixed().diff_status(
                &FormatOptions::default()
                    .expanded()
                    .with_separator(", ")
                    .with_prefix("Changes: ")
            ),
            "Changes: 2 files added, 1 file changed, 2 files deleted"
        );
    }

    #[test]
    fn expanded_diff_status_skips_zero_clauses() {
        let status = repo(vec![file('D', "a.rs")]);
        assert_eq!(
            status.diff_status(&FormatOptions::default().expanded().with_separator(", ")),
            "1 file deleted"
        );
    }

    #[test]
    fn no_files_returns_empty_verbatim() {
        let status = repo(vec![]);
        let options = FormatOptions::default()
            .with_empty("clean")
            .with_prefix(">> ")
            .with_separator("|");

        assert_eq!(status.diff_status(&options), "clean");
        assert_eq!(status.diff_status(&options.clone().expanded()), "clean");
        assert_eq!(status.diff_status(&FormatOptions::default()), "");
        assert!(!status.has_changes());
    }

    #[test]
    fn tally_is_memoized() {
        let mut status = repo(vec![file('M', "a.rs")]);
        assert_eq!(status.diff_status(&FormatOptions::default()), "+0 ~1 -0");

        status.files.push(file('A', "b.rs"));
        status.files.push(file('D', "c.rs"));

        assert_eq!(status.diff_status(&FormatOptions::default()), "+0 ~1 -0");
        assert_eq!(status.diff_tally().changed, 1);
    }

    #[test]
    fn in_sync_upstream_is_empty() {
        let state = UpstreamState {
            ahead: 0,
            behind: 0,
        };
        let options = FormatOptions::default()
            .expanded()
            .with_prefix("upstream: ")
            .with_empty("up to date");

        assert_eq!(
            RepositoryStatus::format_upstream_status(
                Some("origin/main"),
                state,
                &FormatOptions::default()
            ),
            ""
        );
        assert_eq!(
            RepositoryStatus::format_upstream_status(Some("origin/main"), state, &options),
            "up to date"
        );
    }

    #[test]
    fn no_upstream_is_empty() {
        let state = UpstreamState {
            ahead: 4,
            behind: 1,
        };
        assert_eq!(
            RepositoryStatus::format_upstream_status(
                None,
                state,
                &FormatOptions::default().with_empty("-")
            ),
            "-"
        );
    }

    #[test]
    fn expanded_upstream_status() {
        let ahead = UpstreamState {
            ahead: 3,
            behind: 0,
        };
        assert_eq!(
            RepositoryStatus::format_upstream_status(
                Some("origin/main"),
                ahead,
                &FormatOptions::default().expanded()
            ),
            "3 commits ahead"
        );

        let diverged = UpstreamState {
            ahead: 1,
            behind: 2,
        };
        assert_eq!(
            RepositoryStatus::format_upstream_status(
                Some("origin/main"),
                diverged,
                &FormatOptions::default().expanded().with_separator(", ")
            ),
            "2 commits behind, 1 commit ahead"
        );
    }

    #[test]
    fn compact_upstream_status() {
        let state = UpstreamState {
            ahead: 3,
            behind: 0,
        };
        assert_eq!(
            RepositoryStatus::format_upstream_status(
                Some("origin/main"),
                state,
                &FormatOptions::default().with_prefix("(")
            ),
            "(0\u{2193} 3\u{2191}"
        );
    }

    #[test]
    fn instance_upstream_status() {
        let status = RepositoryStatus::new(
            "/repo",
            "main",
            SHA,
            vec![],
            UpstreamState {
                ahead: 0,
                behind: 5,
            },
            Some("origin/main".to_string()),
        );

        assert_eq!(
            status.upstream_status(&FormatOptions::default().expanded()),
            "5 commits behind"
        );
        assert_eq!(
            status.upstream_status(&FormatOptions::default()),
            "5\u{2193} 0\u{2191}"
        );
    }

    #[test]
    fn attached_branch() {
        let status = mixed();
        assert!(!status.is_detached());
        assert_eq!(status.branch(), "main");
        assert_eq!(status.reference(), "main");
    }

    #[test]
    fn detached_head() {
        let status = RepositoryStatus::new(
            "/repo",
            "(detached)",
            SHA,
            vec![],
            UpstreamState::default(),
            None,
        );

        assert!(status.is_detached());
        assert_eq!(status.branch(), "(1a2b3c4...)");
        assert_eq!(status.sha(), SHA);
        assert_eq!(status.reference(), SHA);
    }

    #[test]
    fn unnamed_branch_is_not_detached() {
        let status = RepositoryStatus::new(
            "/repo",
            "",
            "",
            vec![file('M', "a.rs")],
            UpstreamState::default(),
            None,
        );

        assert!(!status.is_detached());
        assert_eq!(status.branch(), "");
        assert_eq!(status.reference(), "");
    }

    #[test]
    fn equality_ignores_cached_tally() {
        let a = mixed();
        let b = mixed();
        a.diff_tally();

        assert_eq!(a, b);
    }
}
