//! Composite drawable holding an ordered list of children.

use log::trace;

use crate::{
    draw::{Drawable, Renderer},
    geometry::Transform,
};

/// An ordered group of drawables drawn under one transform.
///
/// Children are owned exclusively and fixed at construction. Drawing forwards
/// to each child in construction order; the compound itself issues no renderer
/// calls, so an empty compound is a valid no-op.
#[derive(Debug, Default)]
pub struct Compound {
    drawables: Vec<Box<dyn Drawable>>,
}

impl Compound {
    pub fn new(drawables: Vec<Box<dyn Drawable>>) -> Self {
        Self { drawables }
    }

    /// Returns the number of direct children
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Iterates over the direct children in draw order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.drawables.iter().map(|drawable| drawable.as_ref())
    }
}

impl Drawable for Compound {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform) {
        trace!(children = self.drawables.len(); "Drawing compound");
        for drawable in &self.drawables {
            drawable.draw(renderer, transform);
        }
    }
}
