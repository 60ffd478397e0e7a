//! End-to-end rendering: porcelain v2 text in, summary lines out.

use crate::{cli::Args, config::Config, run};
use clap::Parser;

const SHA: &str = "1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b";

fn dirty() -> String {
    format!(
        "# branch.oid {SHA}\n\
         # branch.head main\n\
         # branch.upstream origin/main\n\
         # branch.ab +2 -1\n\
         1 M. N... 100644 100644 100644 aaaaaaa bbbbbbb src/lib.rs\n\
         1 .D N... 100644 100644 000000 aaaaaaa aaaaaaa README.md\n\
         2 R. N... 100644 100644 100644 aaaaaaa aaaaaaa R100 src/new_name.rs\tsrc/old_name.rs\n\
         ? notes.txt\n"
    )
}

fn clean() -> String {
    format!(
        "# branch.oid {SHA}\n\
         # branch.head main\n\
         # branch.upstream origin/main\n\
         # branch.ab +0 -0\n"
    )
}

fn args(cli: &[&str]) -> Args {
    Args::parse_from(["repostat", "--repo", "/repo"].iter().chain(cli))
}

#[test]
fn summary() {
    let output = run(&args(&[]), Config::default(), &dirty()).unwrap();
    insta::assert_snapshot!(output, @r"
    main...origin/main
    +1 ~2 -1
    1↓ 2↑
    ");
}

#[test]
fn summary_with_files() {
    let output = run(&args(&["--files"]), Config::default(), &dirty()).unwrap();
    insta::assert_snapshot!(output, @r"
    main...origin/main
    +1 ~2 -1
    1↓ 2↑
    $(diff-modified) modified  lib.rs  •  src
    $(diff-removed) deleted   README.md
    $(diff-renamed) renamed   new_name.rs  •  src ← src/old_name.rs
    $(diff-added) untracked notes.txt
    ");
}

#[test]
fn files_without_rename_source() {
    let mut config = Config::default();
    config.files.include_original = false;
    config.files.separator = " in ".to_string();

    let output = run(&args(&["--files"]), config, &dirty()).unwrap();
    insta::assert_snapshot!(output, @r"
    main...origin/main
    +1 ~2 -1
    1↓ 2↑
    $(diff-modified) modified  lib.rs in src
    $(diff-removed) deleted   README.md
    $(diff-renamed) renamed   new_name.rs in src
    $(diff-added) untracked notes.txt
    ");
}

#[test]
fn expanded_summary() {
    let output = run(
        &args(&["--expand", "--separator", ", "]),
        Config::default(),
        &dirty(),
    )
    .unwrap();

    insta::assert_snapshot!(output, @r"
    main...origin/main
    1 file added, 2 files changed, 1 file deleted
    1 commit behind, 2 commits ahead
    ");
}

#[test]
fn prefixed_summary() {
    let output = run(&args(&["--prefix", "> "]), Config::default(), &dirty()).unwrap();
    insta::assert_snapshot!(output, @r"
    main...origin/main
    > +1 ~2 -1
    > 1↓ 2↑
    ");
}

#[test]
fn clean_repo_prints_only_branch() {
    let output = run(&args(&["--prefix", "> "]), Config::default(), &clean()).unwrap();
    assert_eq!(output, "main...origin/main\n");
}

#[test]
fn clean_repo_with_empty_text() {
    let output = run(&args(&["--empty", "clean"]), Config::default(), &clean()).unwrap();
    insta::assert_snapshot!(output, @r"
    main...origin/main
    clean
    clean
    ");
}

#[test]
fn detached_head() {
    let input = format!("# branch.oid {SHA}\n# branch.head (detached)\n? scratch.txt\n");
    let output = run(&args(&["--files"]), Config::default(), &input).unwrap();

    insta::assert_snapshot!(output, @r"
    (1a2b3c4...)
    +1 ~0 -0
    $(diff-added) untracked scratch.txt
    ");
}

#[test]
fn status_without_branch_headers() {
    let input = "1 .M N... 100644 100644 100644 aaaaaaa aaaaaaa src/lib.rs\n? notes.txt\n";
    let output = run(&args(&["--files"]), Config::default(), input).unwrap();

    insta::assert_snapshot!(output, @r"
    +1 ~1 -0
    $(diff-modified) modified  lib.rs  •  src
    $(diff-added) untracked notes.txt
    ");
}

#[test]
fn config_options_apply_without_flags() {
    let mut config = Config::default();
    config.diff.expand = true;
    config.upstream.prefix = "upstream: ".to_string();

    let output = run(&args(&[]), config, &dirty()).unwrap();
    insta::assert_snapshot!(output, @r"
    main...origin/main
    1 file added 2 files changed 1 file deleted
    upstream: 1↓ 2↑
    ");
}

#[test]
fn bad_input_is_an_error() {
    let err = run(&args(&[]), Config::default(), "## main...origin/main\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Couldn't parse status line: \"## main...origin/main\""
    );
}
