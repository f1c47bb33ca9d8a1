//! Turning-circle drawable.

use crate::{
    color::Color,
    draw::{Drawable, Renderer, TURN_RADIUS},
    geometry::{Bounds, Transform, Vector2},
    path::TurnSegment,
};

/// The turning circle of a planned turn.
///
/// Renders a stroked circle of radius [`TURN_RADIUS`] centered at the start
/// position. The radius and sweep carried by the turn itself do not affect the
/// glyph; wrap the [`TurnSegment`] in a [`Path`](crate::draw::Path) to draw the
/// swept arc instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    color: Color,
    start: Vector2,
    turn: TurnSegment,
}

impl Turn {
    pub fn new(color: Color, start: Vector2, turn: TurnSegment) -> Self {
        Self { color, start, turn }
    }

    /// Builds a turn glyph anchored at the turn's own starting position
    pub fn from_segment(color: Color, turn: TurnSegment) -> Self {
        Self::new(color, turn.start().position(), turn)
    }

    pub fn start(&self) -> Vector2 {
        self.start
    }

    pub fn turn(&self) -> &TurnSegment {
        &self.turn
    }

    /// Bounding box of the rendered circle
    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.start, TURN_RADIUS)
    }
}

impl Drawable for Turn {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform) {
        renderer.set_stroke_color(self.color);
        renderer.begin_path();
        renderer.oval(self.bounds());
        renderer.apply_transform(transform);
        renderer.stroke();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        draw::{RecordingRenderer, RenderCommand},
        geometry::Pose2,
    };

    #[test]
    fn test_turn_commands() {
        let color = Color::new("purple").unwrap();
        let segment = TurnSegment::new(Pose2::new(Vector2::new(0.0, 0.0), 0.0), 12.0, 1.0);
        let turn = Turn::new(color, Vector2::new(100.0, 50.0), segment);

        let mut renderer = RecordingRenderer::new();
        turn.draw(&mut renderer, &Transform::identity());

        assert_eq!(
            renderer.commands(),
            &[
                RenderCommand::SetStrokeColor(color),
                RenderCommand::BeginPath,
                RenderCommand::Oval(Bounds::from_corners(
                    Vector2::new(70.0, 20.0),
                    Vector2::new(130.0, 80.0),
                )),
                RenderCommand::ApplyTransform(Transform::identity()),
                RenderCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_turn_from_segment_uses_segment_start() {
        let segment = TurnSegment::new(Pose2::new(Vector2::new(-4.0, 9.0), 0.2), 5.0, -0.5);
        let turn = Turn::from_segment(Color::default(), segment);

        assert_eq!(turn.start(), Vector2::new(-4.0, 9.0));
        assert_eq!(turn.turn(), &segment);
    }

    #[test]
    fn test_turn_never_fills() {
        let segment = TurnSegment::new(Pose2::default(), 3.0, 3.0);
        let turn = Turn::from_segment(Color::default(), segment);

        let mut renderer = RecordingRenderer::new();
        turn.draw(&mut renderer, &Transform::identity());

        assert!(!renderer.commands().contains(&RenderCommand::Fill));
    }

    proptest! {
        #[test]
        fn radius_ignores_turn_descriptor(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            radius in -50.0f32..500.0,
            angle in -7.0f32..7.0,
        ) {
            let start = Vector2::new(x, y);
            let segment = TurnSegment::new(Pose2::new(start, 0.0), radius, angle);
            let turn = Turn::new(Color::default(), start, segment);

            let mut renderer = RecordingRenderer::new();
            turn.draw(&mut renderer, &Transform::identity());

            let ovals: Vec<Bounds> = renderer
                .commands()
                .iter()
                .filter_map(|command| match command {
                    RenderCommand::Oval(bounds) => Some(*bounds),
                    _ => None,
                })
                .collect();

            prop_assert_eq!(ovals, vec![Bounds::around(start, TURN_RADIUS)]);
        }
    }
}
