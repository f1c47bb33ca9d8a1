//! A renderer that records calls instead of drawing.

use crate::{
    color::Color,
    draw::Renderer,
    geometry::{Bounds, Transform, Vector2},
};

/// One recorded [`Renderer`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    SetStrokeColor(Color),
    SetFillColor(Color),
    BeginPath,
    MoveTo(Vector2),
    LineTo(Vector2),
    Oval(Bounds),
    ApplyTransform(Transform),
    Stroke,
    Fill,
}

/// Records every renderer call in order.
///
/// Useful for hosts that replay or diff draw calls, and for asserting on the
/// exact command stream a scene produces.
///
/// # Example
///
/// ```
/// # use plotline_core::draw::{RecordingRenderer, RenderCommand, Renderer};
/// # use plotline_core::geometry::Vector2;
/// let mut renderer = RecordingRenderer::new();
/// renderer.begin_path();
/// renderer.move_to(Vector2::new(1.0, 2.0));
///
/// assert_eq!(
///     renderer.commands(),
///     &[RenderCommand::BeginPath, RenderCommand::MoveTo(Vector2::new(1.0, 2.0))]
/// );
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    /// Creates a new renderer with an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in call order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Consumes the renderer and returns its recording.
    pub fn into_commands(self) -> Vec<RenderCommand> {
        self.commands
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(RenderCommand::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(RenderCommand::SetFillColor(color));
    }

    fn begin_path(&mut self) {
        self.commands.push(RenderCommand::BeginPath);
    }

    fn move_to(&mut self, point: Vector2) {
        self.commands.push(RenderCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Vector2) {
        self.commands.push(RenderCommand::LineTo(point));
    }

    fn oval(&mut self, bounds: Bounds) {
        self.commands.push(RenderCommand::Oval(bounds));
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.commands.push(RenderCommand::ApplyTransform(*transform));
    }

    fn stroke(&mut self) {
        self.commands.push(RenderCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(RenderCommand::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_new_is_empty() {
        let renderer = RecordingRenderer::new();
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_recording_renderer_keeps_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_fill_color(Color::default());
        renderer.begin_path();
        renderer.oval(Bounds::around(Vector2::default(), 1.0));
        renderer.apply_transform(&Transform::identity());
        renderer.fill();

        assert_eq!(
            renderer.into_commands(),
            vec![
                RenderCommand::SetFillColor(Color::default()),
                RenderCommand::BeginPath,
                RenderCommand::Oval(Bounds::around(Vector2::default(), 1.0)),
                RenderCommand::ApplyTransform(Transform::identity()),
                RenderCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_recording_renderer_clear() {
        let mut renderer = RecordingRenderer::new();
        renderer.stroke();
        renderer.clear();
        assert!(renderer.commands().is_empty());
    }
}
