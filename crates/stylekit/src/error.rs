//! Error types for stylesheet loading, editing and writing.
//!
//! Malformed CSS is never an error: the parser drops what it cannot
//! understand. Errors only come from the outside world (files, network) or
//! from misuse of the programmatic API.

use std::io;
use std::path::PathBuf;

use chroma::ColorError;
use thiserror::Error;

/// Errors that can occur while loading, editing or writing a stylesheet.
///
/// # Examples
///
/// ```rust
/// use stylekit::{CssError, Stylesheet};
///
/// let result = Stylesheet::parse_file("does/not/exist.css");
/// assert!(matches!(result, Err(CssError::FileNotFound(_))));
/// ```
#[derive(Error, Debug)]
pub enum CssError {
    /// The source file does not exist.
    #[error("stylesheet file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Rendering to the destination path failed.
    #[error("failed to write stylesheet to {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Index-style assignment was given a node of the wrong kind.
    ///
    /// The string names the kind of node that was expected.
    #[error("invalid node type, expected a {0}")]
    TypeInvalid(&'static str),

    /// An I/O error occurred while reading an existing stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] io::Error),

    /// The stylesheet could not be fetched from its URI.
    #[cfg(feature = "uri")]
    #[error("failed to fetch stylesheet: {0}")]
    Fetch(String),

    /// A declaration value was read as a color and is not one.
    #[error(transparent)]
    Color(#[from] ColorError),
}
