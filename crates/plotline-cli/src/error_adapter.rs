//! Error adapter for converting PlotlineError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Plan parse errors
//! carry the plan source and the byte span reported by the TOML parser, and are
//! rendered as labeled source snippets.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use plotline::PlotlineError;

/// Adapter for a plan parse error with source information.
pub struct ParseAdapter<'a> {
    message: &'a str,
    span: Option<Range<usize>>,
    src: &'a str,
}

impl<'a> ParseAdapter<'a> {
    /// Create a new parse adapter.
    pub fn new(message: &'a str, span: Option<Range<usize>>, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message.trim_end())
    }
}

impl std::error::Error for ParseAdapter<'_> {}

impl MietteDiagnostic for ParseAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("plotline::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span.clone()?;
        let label =
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span_to_miette(span));
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-diagnostic [`PlotlineError`] variants.
///
/// This adapter handles errors that don't have source information, such as
/// I/O errors, plan validation errors and export errors.
pub struct ErrorAdapter<'a>(pub &'a PlotlineError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PlotlineError::Io(_) => "plotline::io",
            PlotlineError::Parse { .. } => "plotline::parse",
            PlotlineError::Plan(_) => "plotline::plan",
            PlotlineError::Export(_) => "plotline::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            PlotlineError::Plan(_) => Some(Box::new(
                "check the colors, coordinates and trace settings of the named entry",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a parse diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Parse(ParseAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a byte range to a miette [`SourceSpan`].
fn span_to_miette(span: Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

/// Convert a [`PlotlineError`] into a list of reportable errors.
///
/// [`PlotlineError::Parse`] becomes a labeled source snippet; every other
/// variant becomes a single coded error.
pub fn to_reportables(err: &PlotlineError) -> Vec<Reportable<'_>> {
    match err {
        PlotlineError::Parse { message, span, src } => {
            vec![Reportable::Parse(ParseAdapter::new(message, span.clone(), src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(message: &str, span: Option<Range<usize>>, src: &str) -> PlotlineError {
        PlotlineError::Parse {
            message: message.to_string(),
            span,
            src: src.to_string(),
        }
    }

    #[test]
    fn test_parse_error_with_span() {
        let err = parse_error(
            "invalid type: string \"big\", expected f32\n",
            Some(10..15),
            "radius = \"big\"",
        );

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Parse(p) => {
                assert_eq!(p.to_string(), "invalid type: string \"big\", expected f32");
                let labels: Vec<_> = p.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                assert_eq!(labels[0].offset(), 10);
                assert_eq!(labels[0].len(), 5);
            }
            Reportable::Error(_) => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_parse_error_without_span() {
        let err = parse_error("unexpected end of input", None, "");
        let reportables = to_reportables(&err);

        assert!(reportables[0].labels().is_none());
        assert!(reportables[0].source_code().is_some());
    }

    #[test]
    fn test_non_parse_error() {
        let err = PlotlineError::Plan(
            "trace #1: a trace needs at least 2 waypoints, got 1".to_string(),
        );

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.to_string(),
                    "Plan error: trace #1: a trace needs at least 2 waypoints, got 1"
                );
                assert_eq!(e.code().unwrap().to_string(), "plotline::plan");
                assert!(e.help().is_some());
            }
            Reportable::Parse(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_error_codes() {
        let io = PlotlineError::Io(std::io::Error::other("disk"));
        let export = PlotlineError::Export("canvas".to_string());

        assert_eq!(ErrorAdapter(&io).code().unwrap().to_string(), "plotline::io");
        assert_eq!(
            ErrorAdapter(&export).code().unwrap().to_string(),
            "plotline::export"
        );
    }
}
