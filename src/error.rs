use std::{fmt::Display, io};

#[derive(Debug)]
pub enum Error {
    Config(figment::Error),
    CurrentDir(io::Error),
    OpenLogFile(io::Error),
    ReadInput(io::Error),
    WriteOutput(io::Error),
    ParseStatusLine(String),
    InvalidAheadBehind(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(e) => f.write_fmt(format_args!("Configuration error: {}", e)),
            Error::CurrentDir(e) => {
                f.write_fmt(format_args!("Couldn't read current directory: {}", e))
            }
            Error::OpenLogFile(e) => f.write_fmt(format_args!("Couldn't open log file: {}", e)),
            Error::ReadInput(e) => f.write_fmt(format_args!("Couldn't read git status: {}", e)),
            Error::WriteOutput(e) => f.write_fmt(format_args!("Couldn't write output: {}", e)),
            Error::ParseStatusLine(line) => {
                f.write_fmt(format_args!("Couldn't parse status line: {:?}", line))
            }
            Error::InvalidAheadBehind(value) => {
                f.write_fmt(format_args!("Invalid ahead/behind counts: {:?}", value))
            }
        }
    }
}
