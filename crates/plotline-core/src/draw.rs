//! Drawable Components for Trajectory Scenes
//!
//! This module provides the drawable primitives used to visualize a robot's
//! planned or historical trajectory. Every primitive implements the [`Drawable`]
//! trait and turns its own geometric parameters into calls on a [`Renderer`],
//! under a caller-supplied [`Transform`].
//!
//! # Drawables
//!
//! - [`Compound`] - An ordered group of drawables sharing one transform
//! - [`Line`] - A straight stroke between two points
//! - [`Arrow`] - A chevron glyph pointing along an orientation
//! - [`Turn`] - The fixed-radius turning circle of a planned turn
//! - [`Circle`] - A stroked or filled circle
//! - [`Path`] - A fixed-resolution polyline sampled from path segments
//!
//! # Renderers
//!
//! The actual drawing surface is external. Besides the [`Renderer`] trait this
//! module ships two surfaces that never touch pixels:
//!
//! - [`RecordingRenderer`] - Records every call as a [`RenderCommand`]
//! - [`BoundsRenderer`] - Measures the transformed extent of a scene
//!
//! # Example
//!
//! ```
//! use plotline_core::color::Color;
//! use plotline_core::draw::{Circle, Compound, Drawable, Line, RecordingRenderer};
//! use plotline_core::geometry::{Transform, Vector2};
//!
//! let scene = Compound::new(vec![
//!     Box::new(Line::new(
//!         Color::new("red").unwrap(),
//!         Vector2::new(0.0, 0.0),
//!         Vector2::new(10.0, 0.0),
//!     )),
//!     Box::new(Circle::new(
//!         Color::new("blue").unwrap(),
//!         Vector2::new(5.0, 5.0),
//!         2.0,
//!         true,
//!     )),
//! ]);
//!
//! let mut renderer = RecordingRenderer::new();
//! scene.draw(&mut renderer, &Transform::identity());
//! assert_eq!(renderer.commands().len(), 11);
//! ```

mod arrow;
mod circle;
mod compound;
mod line;
mod measure;
mod path;
mod recorder;
mod turn;

pub use arrow::{Arrow, arrow_at, arrow_at_pose};
pub use circle::{Circle, circle_at};
pub use compound::Compound;
pub use line::{Line, line_between};
pub use measure::BoundsRenderer;
pub use path::Path;
pub use recorder::{RecordingRenderer, RenderCommand};
pub use turn::Turn;

use std::num::NonZeroUsize;

use crate::{
    color::Color,
    geometry::{Bounds, Transform, Vector2},
};

/// Radius of every rendered turning circle.
pub const TURN_RADIUS: f32 = 30.0;

/// Number of straight segments each path segment is sampled into.
pub const SEGMENTS_PER_PATH: NonZeroUsize = NonZeroUsize::new(20).unwrap();

/// A minimal 2D drawing surface.
///
/// The surface keeps one current path. Drawables start a path with
/// [`begin_path`](Renderer::begin_path), add geometry to it, apply a transform
/// to the whole path and finally stroke or fill it.
pub trait Renderer {
    /// Sets the color used by subsequent [`stroke`](Renderer::stroke) calls.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the color used by subsequent [`fill`](Renderer::fill) calls.
    fn set_fill_color(&mut self, color: Color);

    /// Discards the current path and starts an empty one.
    fn begin_path(&mut self);

    /// Starts a new subpath at `point`.
    fn move_to(&mut self, point: Vector2);

    /// Extends the current subpath with a straight segment to `point`.
    fn line_to(&mut self, point: Vector2);

    /// Adds a closed ellipse inscribed in `bounds` to the current path.
    fn oval(&mut self, bounds: Bounds);

    /// Applies `transform` to everything in the current path.
    fn apply_transform(&mut self, transform: &Transform);

    /// Strokes the current path with the stroke color.
    fn stroke(&mut self);

    /// Fills the current path with the fill color.
    fn fill(&mut self);
}

/// Trait for scene elements that can issue renderer calls.
///
/// Drawables are immutable once constructed, so drawing the same drawable
/// twice with the same transform issues the same sequence of calls.
pub trait Drawable: std::fmt::Debug {
    /// Issues this drawable's renderer calls under `transform`.
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform);
}

impl<D: Drawable + ?Sized> Drawable for Box<D> {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform) {
        (**self).draw(renderer, transform);
    }
}
