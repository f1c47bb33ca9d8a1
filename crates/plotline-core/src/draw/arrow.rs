//! Arrowhead (chevron) drawable.
//!
//! An [`Arrow`] is a "V" whose apex sits at its position and whose bisector
//! points along its orientation. With `s = size` and `o = orientation`:
//!
//! ```text
//! dx = s·sin(o),  dy = s·cos(o)
//! center = position - (dx, dy)
//! wings  = center ± (dy, -dx)
//! ```
//!
//! The glyph is stroked as the polyline `left wing → apex → right wing`, so
//! both wings lie `s·√2` from the apex.

use crate::{
    color::Color,
    draw::{Drawable, Renderer},
    geometry::{Pose2, Transform, Vector2},
};

/// A chevron pointing along `orientation`, with its apex at `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    color: Color,
    position: Vector2,
    orientation: f32,
    size: f32,
}

impl Arrow {
    pub fn new(color: Color, position: Vector2, orientation: f32, size: f32) -> Self {
        Self {
            color,
            position,
            orientation,
            size,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the left wing, apex and right wing in stroke order.
    ///
    /// A zero size collapses all three points onto the apex.
    pub fn vertices(&self) -> [Vector2; 3] {
        let (sin, cos) = self.orientation.sin_cos();
        let dx = self.size * sin;
        let dy = self.size * cos;
        let center = self.position.sub(Vector2::new(dx, dy));

        [
            center.sub(Vector2::new(dy, -dx)),
            self.position,
            center.add(Vector2::new(dy, -dx)),
        ]
    }
}

/// Builds an [`Arrow`] from raw coordinates.
pub fn arrow_at(color: Color, x: f32, y: f32, orientation: f32, size: f32) -> Arrow {
    Arrow::new(color, Vector2::new(x, y), orientation, size)
}

/// Builds an [`Arrow`] at a sampled pose, pointing along its heading.
pub fn arrow_at_pose(color: Color, pose: Pose2, size: f32) -> Arrow {
    Arrow::new(color, pose.position(), pose.orientation(), size)
}

impl Drawable for Arrow {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform) {
        let [left, apex, right] = self.vertices();

        renderer.set_stroke_color(self.color);
        renderer.begin_path();
        renderer.move_to(left);
        renderer.line_to(apex);
        renderer.line_to(right);
        renderer.apply_transform(transform);
        renderer.stroke();
    }
}
