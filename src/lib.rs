//! # quick
//!
//! A command-line cheat-sheet viewer library.
//!
//! Quick files are short markdown-like notes cached locally per
//! `topic[:subtopic]`. This library resolves topics to cached files, keeps
//! the cache up to date with git, and colors files for the terminal with a
//! line-level markdown classifier.
//!
//! ## Example
//!
//! ```rust
//! use quick::highlight::{ColorMode, LineState, classify_document, render};
//!
//! let sheet = "Git\n===\n\n* git status\n* git diff\n\n    git log --oneline";
//!
//! let states: Vec<LineState> = classify_document(sheet).iter().map(|l| l.state).collect();
//! assert_eq!(states[0], LineState::Title);
//! assert_eq!(states[3], LineState::Bulleted);
//! assert_eq!(states[6], LineState::Codeblock);
//!
//! let colored = render(sheet, ColorMode::On, || true);
//! assert!(colored.contains("\x1b[36m    git log --oneline\x1b[0m"));
//! ```

/// Local cache of quick files.
pub mod cache;

/// Configuration module for persisting user preferences.
///
/// Provides the cache location, repository, website and color settings.
pub mod config;

/// Launching an editor for `--edit`.
pub mod edit;

pub mod error;

/// Line classification and terminal coloring.
///
/// The only part of quick that looks inside a quick file.
pub mod highlight;

/// Topic argument parsing.
pub mod topic;

/// git-based cache updates.
pub mod update;

/// Opening topics on the website.
pub mod web;

// Re-export commonly used types for convenience
pub use cache::Cache;
pub use config::Config;
pub use error::{QuickError, Result};
pub use highlight::{ColorMode, render};
pub use topic::{Topic, TopicAction};
