use crate::{
    Res,
    error::Error,
    git::{
        status::{RepositoryStatus, UpstreamState},
        status_file::StatusFile,
    },
};
use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

static AHEAD_BEHIND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+(?<ahead>\d+) -(?<behind>\d+)$").unwrap());

/// Parses the output of `git status --porcelain=v2 --branch`.
pub fn parse(repo_path: &Path, input: &str) -> Res<RepositoryStatus> {
    let mut sha = String::new();
    let mut branch = None;
    let mut upstream = None;
    let mut state = UpstreamState::default();
    let mut files = vec![];

    for line in input.lines().filter(|line| !line.is_empty()) {
        if let Some(header) = line.strip_prefix("# ") {
            let (key, value) = header.split_once(' ').unwrap_or((header, ""));

            match key {
                "branch.oid" if value != "(initial)" => sha = value.to_string(),
                "branch.oid" => (),
                "branch.head" => branch = Some(value.to_string()),
                "branch.upstream" => upstream = Some(value.to_string()),
                "branch.ab" => state = parse_ahead_behind(value)?,
                _ => log::trace!("Skipping status header {:?}", header),
            }

            continue;
        }

        files.push(parse_file(repo_path, line)?);
    }

    let branch = branch.unwrap_or_else(|| {
        log::debug!("No branch headers, was `--branch` passed to git status?");
        String::new()
    });

    log::debug!("Parsed {} changed files on {:?}", files.len(), branch);

    Ok(RepositoryStatus::new(repo_path, branch, sha, files, state, upstream))
}

fn parse_ahead_behind(value: &str) -> Res<UpstreamState> {
    let invalid = || Error::InvalidAheadBehind(value.to_string());
    let cap = AHEAD_BEHIND_REGEX.captures(value).ok_or_else(invalid)?;

    Ok(UpstreamState {
        ahead: cap["ahead"].parse().map_err(|_| invalid())?,
        behind: cap["behind"].parse().map_err(|_| invalid())?,
    })
}

fn parse_file(repo_path: &Path, line: &str) -> Res<StatusFile> {
    let bad_line = || Error::ParseStatusLine(line.to_string());

    let (kind, rest) = line.split_once(' ').ok_or_else(bad_line)?;

    let file = match kind {
        // 1 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <path>
        "1" => {
            let fields = fields(rest, 8).ok_or_else(bad_line)?;
            StatusFile::from_porcelain_code(
                repo_path,
                code(fields[0]).ok_or_else(bad_line)?,
                unquote(fields[7]).ok_or_else(bad_line)?,
                None,
            )
        }
        // 2 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <X><score> <path>\t<origPath>
        "2" => {
            let fields = fields(rest, 9).ok_or_else(bad_line)?;
            let (path, orig_path) = fields[8].split_once('\t').ok_or_else(bad_line)?;
            StatusFile::from_porcelain_code(
                repo_path,
                code(fields[0]).ok_or_else(bad_line)?,
                unquote(path).ok_or_else(bad_line)?,
                Some(unquote(orig_path).ok_or_else(bad_line)?),
            )
        }
        // u <XY> <sub> <m1> <m2> <m3> <mW> <h1> <h2> <h3> <path>
        "u" => {
            let fields = fields(rest, 10).ok_or_else(bad_line)?;
            StatusFile::from_porcelain_code(
                repo_path,
                code(fields[0]).ok_or_else(bad_line)?,
                unquote(fields[9]).ok_or_else(bad_line)?,
                None,
            )
        }
        "?" | "!" => {
            let code = kind.chars().next();
            StatusFile::new(repo_path, None, code, unquote(rest).ok_or_else(bad_line)?, None)
        }
        _ => return Err(bad_line().into()),
    };

    Ok(file)
}

/// Splits off `count` space separated fields, the last one keeping any spaces.
fn fields(rest: &str, count: usize) -> Option<Vec<&str>> {
    let fields = rest.splitn(count, ' ').collect::<Vec<_>>();
    (fields.len() == count && !fields[count - 1].is_empty()).then_some(fields)
}

fn code(xy: &str) -> Option<[char; 2]> {
    let mut chars = xy.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(x), Some(y), None) => Some([x, y]),
        _ => None,
    }
}

/// Undoes git's C-style quoting of unusual path names.
fn unquote(path: &str) -> Option<PathBuf> {
    let Some(quoted) = path
        .strip_prefix('"')
        .and_then(|path| path.strip_suffix('"'))
    else {
        return Some(PathBuf::from(path));
    };

    let bytes = smashquote::unescape_bytes(quoted.as_bytes())
        .inspect_err(|err| log::debug!("Couldn't unquote {:?}: {:?}", path, err))
        .ok()?;

    Some(PathBuf::from(String::from_utf8_lossy(&bytes).into_owned()))
}
