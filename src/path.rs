//! Lexical path helpers for repository-relative file names.
//!
//! Nothing here touches the filesystem. Returned strings always use `/`.

use path_slash::PathExt;
use std::path::{Component, Path, PathBuf};

pub fn resolve_absolute(base: &Path, rel: &Path) -> PathBuf {
    normalize(&base.join(rel))
}

/// Directory part of `rel`, or `""` when the file sits at the root.
pub fn directory(rel: &Path, relative_to: Option<&Path>) -> String {
    let dir = rel.parent().unwrap_or(Path::new(""));
    to_slash(&relative(dir, relative_to))
}

/// `"{name}{separator}{directory}"`, or only the name when there is no directory.
pub fn formatted_path(rel: &Path, separator: &str, relative_to: Option<&Path>) -> String {
    let name = rel
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let directory = directory(rel, relative_to);

    if directory.is_empty() {
        name
    } else {
        format!("{name}{separator}{directory}")
    }
}

pub fn relative_path(rel: &Path, relative_to: Option<&Path>) -> String {
    to_slash(&relative(rel, relative_to))
}

pub(crate) fn to_slash(path: &Path) -> String {
    path.to_slash_lossy().into_owned()
}

fn relative(path: &Path, relative_to: Option<&Path>) -> PathBuf {
    let path = normalize(path);
    match relative_to {
        Some(base) => pathdiff::diff_paths(&path, normalize(base)).unwrap_or(path),
        None => path,
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => (),
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => (),
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}
