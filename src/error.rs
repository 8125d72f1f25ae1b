//! Error type shared by the cache, update, web and edit commands.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while resolving, fetching or opening cheat sheets.
#[derive(Debug, Error)]
pub enum QuickError {
    /// The requested topic or subtopic has no cached file.
    #[error("No quick file for '{topic}' (looked in {})", path.display())]
    TopicNotFound { topic: String, path: PathBuf },

    /// A topic or subtopic name that would escape the cache directory.
    #[error("Invalid topic name '{0}'")]
    InvalidTopic(String),

    /// The command needs a topic but none was given.
    #[error("No topic given")]
    NoTopic,

    /// The cache directory has not been populated yet.
    #[error("Cache directory {} does not exist. Run 'quick --update' first.", .0.display())]
    CacheMissing(PathBuf),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A listing pattern could not be built from the cache path.
    #[error("Invalid listing pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// `git` ran but reported failure.
    #[error("git {action} failed ({status})")]
    Git {
        action: &'static str,
        status: ExitStatus,
    },

    /// `git` is not installed or not on `PATH`.
    #[error("git was not found on PATH")]
    GitNotFound,

    /// The browser could not be launched.
    #[error("Failed to open {url}: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The editor could not be started.
    #[error("Failed to launch editor '{program}': {source}")]
    EditorLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The editor ran but reported failure.
    #[error("Editor '{program}' exited with {status}")]
    Editor { program: String, status: ExitStatus },

    /// The configuration could not be written.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QuickError>;
