//! Error types for Plotline operations.
//!
//! This module provides the main error type [`PlotlineError`] which wraps
//! the error conditions that can occur while turning a plan into a scene.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for Plotline operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the byte span reported by the TOML parser and the
/// full source text, so callers can point at the offending part of a plan.
#[derive(Debug, Error)]
pub enum PlotlineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Plan error: {0}")]
    Plan(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl PlotlineError {
    /// Create a new `Parse` error from a TOML error and the source it came from.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
