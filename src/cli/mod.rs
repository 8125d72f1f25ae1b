//! Command-line interface for the quick binary.

mod commands;

pub use commands::Cli;

use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;

/// Options prepended to every invocation.
pub const OPTIONS_ENV: &str = "QUICK_OPTIONS";

pub const SHORT_USAGE: &str = "
  quick [options] topic[:subtopic]

    -h, --help                    Output usage information
    -l, --list                    List all quick files with topic
    -e, --edit                    Edit topic or subtopic
    -w, --web                     Open quick file in website
    -u, --update                  Fetch the latest quick files
";

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    Error = 1,
    ArgumentError = 2,
}

impl Exit {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Insert whitespace-separated `options` right after the program name.
pub fn with_prepended_options(
    args: impl IntoIterator<Item = OsString>,
    options: Option<&str>,
) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    if let Some(options) = options {
        out.extend(options.split_whitespace().map(OsString::from));
    }
    out.extend(args);
    out
}

impl Cli {
    /// Parse the process arguments with `QUICK_OPTIONS` applied.
    pub fn parse_with_env() -> Result<Self, clap::Error> {
        let options = std::env::var(OPTIONS_ENV).ok();
        Self::try_parse_from(with_prepended_options(
            std::env::args_os(),
            options.as_deref(),
        ))
    }
}
