//! Renderers that produce output files.

pub mod svg;

pub use self::svg::SvgRenderer;
