pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod glyphs;
pub mod path;
pub mod util;

#[cfg(test)]
mod tests;

use config::{Config, FileConfig};
use error::Error;
use git::{status::RepositoryStatus, status_file::StatusFile};
use std::{env, error::Error as StdError};

pub const APP_NAME: &str = "repostat";

pub type Res<T> = Result<T, Box<dyn StdError>>;

/// Parses porcelain v2 `input` and renders it according to `config`, with `args` on top.
pub fn run(args: &cli::Args, config: Config, input: &str) -> Res<String> {
    let repo_path = match &args.repo {
        Some(path) => path.clone(),
        None => env::current_dir().map_err(Error::CurrentDir)?,
    };

    log::debug!("Parsing status of {:?}", repo_path);
    let status = git::parse::status::parse(&repo_path, input)?;

    log::debug!("Rendering");
    Ok(render(&status, &apply_args(args, config), args.files))
}

fn apply_args(args: &cli::Args, mut config: Config) -> Config {
    for options in [&mut config.diff, &mut config.upstream] {
        options.expand |= args.expand;

        if let Some(prefix) = &args.prefix {
            options.prefix = prefix.clone();
        }
        if let Some(separator) = &args.separator {
            options.separator = separator.clone();
        }
        if let Some(empty) = &args.empty {
            options.empty = empty.clone();
        }
    }

    config
}

/// Branch line when git named one, then the diff and upstream summaries when
/// non-empty, then optionally one line per file.
pub fn render(status: &RepositoryStatus, config: &Config, list_files: bool) -> String {
    let branch = match &status.upstream {
        Some(upstream) => format!("{}...{}", status.branch(), upstream),
        None => status.branch().to_string(),
    };

    let summaries = [
        status.diff_status(&config.diff),
        status.upstream_status(&config.upstream),
    ];

    let files = if list_files {
        status
            .files
            .iter()
            .map(|file| file_line(file, &config.files))
            .collect()
    } else {
        vec![]
    };

    std::iter::once(branch)
        .chain(summaries)
        .filter(|line| !line.is_empty())
        .chain(files)
        .map(|line| line + "\n")
        .collect()
}

fn file_line(file: &StatusFile, config: &FileConfig) -> String {
    let name = file
        .file_name
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let directory = file.formatted_directory(config.include_original);
    let location = if directory.is_empty() {
        name
    } else {
        format!("{name}{}{directory}", config.separator)
    };

    format!("{} {:<9} {location}", file.octicon(), file.status_text())
}
