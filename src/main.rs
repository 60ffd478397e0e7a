use clap::Parser;
use log::LevelFilter;
use repostat::{APP_NAME, Res, cli::Args, config, error::Error};
use std::{
    fs,
    io::{self, Write},
    process,
};

const LOG_FILE: &str = "repostat.log";

fn main() {
    if let Err(err) = run(&Args::parse()) {
        log::error!("{}", err);
        eprintln!("{}: {}", APP_NAME, err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Res<()> {
    if args.log {
        simple_logging::log_to_file(LOG_FILE, LevelFilter::Debug).map_err(Error::OpenLogFile)?;
    }

    log::debug!("Initializing config");
    let config = config::init_config()?;

    log::debug!("Reading status");
    let input = match &args.input {
        Some(path) => fs::read_to_string(path),
        None => io::read_to_string(io::stdin()),
    }
    .map_err(Error::ReadInput)?;

    let output = repostat::run(args, config, &input)?;

    io::stdout()
        .write_all(output.as_bytes())
        .map_err(Error::WriteOutput)?;

    Ok(())
}
