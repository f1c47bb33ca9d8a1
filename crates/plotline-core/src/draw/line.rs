//! Straight line drawable.

use crate::{
    color::Color,
    draw::{Drawable, Renderer},
    geometry::{Transform, Vector2},
};

/// A straight stroke from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    color: Color,
    start: Vector2,
    end: Vector2,
}

impl Line {
    pub fn new(color: Color, start: Vector2, end: Vector2) -> Self {
        Self { color, start, end }
    }

    pub fn start(&self) -> Vector2 {
        self.start
    }

    pub fn end(&self) -> Vector2 {
        self.end
    }
}

/// Builds a [`Line`] from raw coordinate pairs.
///
/// Anything convertible into a [`Vector2`] works for either end, so a vector
/// and a coordinate pair can be mixed freely.
///
/// ```
/// # use plotline_core::color::Color;
/// # use plotline_core::draw::line_between;
/// # use plotline_core::geometry::Vector2;
/// let line = line_between(Color::default(), (0.0, 0.0), Vector2::new(10.0, 0.0));
/// assert_eq!(line.end(), Vector2::new(10.0, 0.0));
/// ```
pub fn line_between(color: Color, start: impl Into<Vector2>, end: impl Into<Vector2>) -> Line {
    Line::new(color, start.into(), end.into())
}

impl Drawable for Line {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform) {
        renderer.set_stroke_color(self.color);
        renderer.begin_path();
        renderer.move_to(self.start);
        renderer.line_to(self.end);
        renderer.apply_transform(transform);
        renderer.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RecordingRenderer, RenderCommand};

    #[test]
    fn test_line_commands() {
        let red = Color::new("red").unwrap();
        let line = Line::new(red, Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0));
        let transform = Transform::scale(2.0, 2.0);

        let mut renderer = RecordingRenderer::new();
        line.draw(&mut renderer, &transform);

        assert_eq!(
            renderer.commands(),
            &[
                RenderCommand::SetStrokeColor(red),
                RenderCommand::BeginPath,
                RenderCommand::MoveTo(Vector2::new(0.0, 0.0)),
                RenderCommand::LineTo(Vector2::new(10.0, 0.0)),
                RenderCommand::ApplyTransform(transform),
                RenderCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_line_between_matches_new() {
        let color = Color::new("green").unwrap();
        let from_pairs = line_between(color, (1.0, 2.0), (3.0, 4.0));
        let from_vectors = Line::new(color, Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        assert_eq!(from_pairs, from_vectors);
    }

    #[test]
    fn test_zero_length_line_still_strokes() {
        let point = Vector2::new(7.0, 7.0);
        let line = Line::new(Color::default(), point, point);

        let mut renderer = RecordingRenderer::new();
        line.draw(&mut renderer, &Transform::identity());

        assert_eq!(renderer.commands().last(), Some(&RenderCommand::Stroke));
    }
}
