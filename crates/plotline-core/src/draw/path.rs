//! Sampled path drawable.

use std::num::NonZeroUsize;

use log::trace;

use crate::{
    color::Color,
    draw::{Drawable, Renderer, SEGMENTS_PER_PATH},
    geometry::Transform,
    path::PathSegment,
};

/// One or more path segments stroked as a single polyline.
///
/// Each segment is sampled at `t = 0, 1/N, ..., 1` where `N` is the
/// resolution ([`SEGMENTS_PER_PATH`] unless overridden), giving `N` straight
/// pieces and `N + 1` vertices per segment. Every segment starts with its own
/// move, so disjoint segments stay disjoint, but the whole list is transformed
/// and stroked once. Sampled orientations are ignored.
#[derive(Debug)]
pub struct Path {
    color: Color,
    segments: Vec<Box<dyn PathSegment>>,
    resolution: NonZeroUsize,
}

impl Path {
    pub fn new(color: Color, segments: Vec<Box<dyn PathSegment>>) -> Self {
        Self {
            color,
            segments,
            resolution: SEGMENTS_PER_PATH,
        }
    }

    /// Builds a path from any collection of one concrete segment type.
    pub fn from_segments<S>(color: Color, segments: impl IntoIterator<Item = S>) -> Self
    where
        S: PathSegment + 'static,
    {
        let segments = segments
            .into_iter()
            .map(|segment| Box::new(segment) as Box<dyn PathSegment>)
            .collect();
        Self::new(color, segments)
    }

    /// Overrides the number of straight pieces each segment is sampled into.
    pub fn with_resolution(mut self, resolution: NonZeroUsize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn resolution(&self) -> NonZeroUsize {
        self.resolution
    }

    pub fn segments(&self) -> &[Box<dyn PathSegment>] {
        &self.segments
    }
}

impl Drawable for Path {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform) {
        if self.segments.is_empty() {
            return;
        }

        let steps = self.resolution.get();
        trace!(segments = self.segments.len(), steps; "Sampling path");

        renderer.set_stroke_color(self.color);
        renderer.begin_path();
        for segment in &self.segments {
            renderer.move_to(segment.interpolate(0.0).position());
            for n in 1..=steps {
                let t = n as f32 / steps as f32;
                renderer.line_to(segment.interpolate(t).position());
            }
        }
        renderer.apply_transform(transform);
        renderer.stroke();
    }
}
