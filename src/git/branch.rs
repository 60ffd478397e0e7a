const SHORT_SHA_LEN: usize = 7;

/// Git reports a detached HEAD as `HEAD`, `(detached)` or a parenthesized
/// label like `(HEAD detached at 1a2b3c4)` depending on the command.
pub fn is_detached(name: &str) -> bool {
    name == "HEAD" || (name.starts_with('(') && name.ends_with(')'))
}

pub fn short_sha(sha: &str) -> &str {
    sha.get(..SHORT_SHA_LEN).unwrap_or(sha)
}

pub fn format_detached(sha: &str) -> String {
    format!("({}...)", short_sha(sha))
}
