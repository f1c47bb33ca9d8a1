//! Circle drawable.

use crate::{
    color::Color,
    draw::{Drawable, Renderer},
    geometry::{Bounds, Transform, Vector2},
};

/// A circle that is either filled or stroked with a single color.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    color: Color,
    center: Vector2,
    radius: f32,
    fill: bool,
}

impl Circle {
    pub fn new(color: Color, center: Vector2, radius: f32, fill: bool) -> Self {
        Self {
            color,
            center,
            radius,
            fill,
        }
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_filled(&self) -> bool {
        self.fill
    }
}

/// Builds a stroke-only [`Circle`] around `center`.
pub fn circle_at(color: Color, center: impl Into<Vector2>, radius: f32) -> Circle {
    Circle::new(color, center.into(), radius, false)
}

impl Drawable for Circle {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform) {
        if self.fill {
            renderer.set_fill_color(self.color);
        } else {
            renderer.set_stroke_color(self.color);
        }

        renderer.begin_path();
        renderer.oval(Bounds::around(self.center, self.radius));
        renderer.apply_transform(transform);

        if self.fill {
            renderer.fill();
        } else {
            renderer.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RecordingRenderer, RenderCommand};

    fn count(commands: &[RenderCommand], wanted: &RenderCommand) -> usize {
        commands.iter().filter(|command| *command == wanted).count()
    }

    #[test]
    fn test_filled_circle_only_fills() {
        let blue = Color::new("blue").unwrap();
        let circle = Circle::new(blue, Vector2::new(5.0, 5.0), 2.0, true);

        let mut renderer = RecordingRenderer::new();
        circle.draw(&mut renderer, &Transform::identity());
        let commands = renderer.commands();

        assert_eq!(count(commands, &RenderCommand::Fill), 1);
        assert_eq!(count(commands, &RenderCommand::Stroke), 0);
        assert_eq!(commands[0], RenderCommand::SetFillColor(blue));
    }

    #[test]
    fn test_stroked_circle_only_strokes() {
        let blue = Color::new("blue").unwrap();
        let circle = circle_at(blue, (5.0, 5.0), 2.0);
        assert!(!circle.is_filled());

        let mut renderer = RecordingRenderer::new();
        circle.draw(&mut renderer, &Transform::identity());
        let commands = renderer.commands();

        assert_eq!(count(commands, &RenderCommand::Stroke), 1);
        assert_eq!(count(commands, &RenderCommand::Fill), 0);
        assert_eq!(commands[0], RenderCommand::SetStrokeColor(blue));
    }

    #[test]
    fn test_circle_oval_bounds() {
        let circle = Circle::new(Color::default(), Vector2::new(5.0, 5.0), 2.0, true);

        let mut renderer = RecordingRenderer::new();
        circle.draw(&mut renderer, &Transform::identity());

        let oval = renderer.commands().iter().find_map(|command| match command {
            RenderCommand::Oval(bounds) => Some(*bounds),
            _ => None,
        });
        let oval = oval.expect("circle should emit an oval");

        assert_eq!(oval.min_x(), 3.0);
        assert_eq!(oval.min_y(), 3.0);
        assert_eq!(oval.width(), 4.0);
        assert_eq!(oval.height(), 4.0);
    }
}
