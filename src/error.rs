//! Error types for loading, laying out and showing a scatter plot.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Axis of the plot, used to report which range is degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors that can stop the plot from being shown.
#[derive(Error, Debug)]
pub enum Error {
    /// A data or configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An in-memory or streamed input failed while being read.
    #[error("cannot read input: {0}")]
    Read(#[source] std::io::Error),

    /// A data row is malformed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the input, header included.
        line: u64,
        /// What was wrong with the row.
        message: String,
    },

    /// The input has a header but no data rows.
    #[error("no data rows found")]
    EmptyData,

    /// An axis has no spread to scale over.
    #[error("degenerate {axis} axis range: min and max are both {value}")]
    DegenerateRange {
        /// Offending axis.
        axis: Axis,
        /// The single observed value.
        value: f64,
    },

    /// Layout values that cannot produce a usable plot.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON configuration could not be parsed.
    #[error("invalid configuration file: {0}")]
    Config(#[from] serde_json::Error),

    /// The window or its event loop failed.
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}
