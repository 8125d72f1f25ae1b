//! Terminal highlighting for cached cheat sheets.
//!
//! Cheat sheets are markdown-like text. Rather than parsing markdown fully,
//! each line is classified with a small state machine ([`classifier`]),
//! mapped to a color ([`color`]) and wrapped in ANSI escape codes
//! ([`render`]).
//!
//! ```
//! use quick::highlight::{ColorMode, render};
//!
//! let out = render("# git\n\nplain text", ColorMode::On, || true);
//! assert!(out.starts_with("\x1b[34m# git"));
//!
//! // Off never touches the text
//! assert_eq!(render("# git", ColorMode::Off, || true), "# git");
//! ```

pub mod classifier;
pub mod color;
pub mod render;

pub use classifier::{ClassifiedLine, Classifier, LineState, classify, classify_document};
pub use color::{Color, color_for};
pub use render::{ColorMode, colorize, render};
