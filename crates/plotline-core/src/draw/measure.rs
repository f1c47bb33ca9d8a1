//! A renderer that measures instead of drawing.

use crate::{
    color::Color,
    draw::Renderer,
    geometry::{Bounds, Transform, Vector2},
};

/// Accumulates the transformed extent of everything stroked or filled.
///
/// Ovals contribute the four corners of their bounding box, which is exact
/// for axis-aligned transforms and conservative otherwise. Paths that are
/// built but never stroked or filled contribute nothing.
#[derive(Debug, Default, Clone)]
pub struct BoundsRenderer {
    pending: Vec<Vector2>,
    bounds: Option<Bounds>,
}

impl BoundsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the extent painted so far, or `None` if nothing was painted.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn commit(&mut self) {
        for point in &self.pending {
            self.bounds = Some(match self.bounds {
                Some(bounds) => bounds.include_point(*point),
                None => Bounds::from_corners(*point, *point),
            });
        }
    }
}

impl Renderer for BoundsRenderer {
    fn set_stroke_color(&mut self, _color: Color) {}

    fn set_fill_color(&mut self, _color: Color) {}

    fn begin_path(&mut self) {
        self.pending.clear();
    }

    fn move_to(&mut self, point: Vector2) {
        self.pending.push(point);
    }

    fn line_to(&mut self, point: Vector2) {
        self.pending.push(point);
    }

    fn oval(&mut self, bounds: Bounds) {
        self.pending.extend(bounds.corners());
    }

    fn apply_transform(&mut self, transform: &Transform) {
        for point in &mut self.pending {
            *point = transform.apply(*point);
        }
    }

    fn stroke(&mut self) {
        self.commit();
    }

    fn fill(&mut self) {
        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Circle, Compound, Drawable, Line};

    #[test]
    fn test_empty_scene_has_no_bounds() {
        let mut renderer = BoundsRenderer::new();
        Compound::default().draw(&mut renderer, &Transform::identity());
        assert_eq!(renderer.bounds(), None);
    }

    #[test]
    fn test_unpainted_path_is_ignored() {
        let mut renderer = BoundsRenderer::new();
        renderer.begin_path();
        renderer.move_to(Vector2::new(100.0, 100.0));
        renderer.begin_path();
        renderer.move_to(Vector2::new(1.0, 1.0));
        renderer.stroke();

        assert_eq!(
            renderer.bounds(),
            Some(Bounds::from_corners(
                Vector2::new(1.0, 1.0),
                Vector2::new(1.0, 1.0)
            ))
        );
    }

    #[test]
    fn test_line_and_circle_extent() {
        let scene = Compound::new(vec![
            Box::new(Line::new(
                Color::default(),
                Vector2::new(0.0, 0.0),
                Vector2::new(10.0, 0.0),
            )),
            Box::new(Circle::new(
                Color::default(),
                Vector2::new(5.0, 5.0),
                2.0,
                true,
            )),
        ]);

        let mut renderer = BoundsRenderer::new();
        scene.draw(&mut renderer, &Transform::identity());

        let bounds = renderer.bounds().unwrap();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.max_x(), 10.0);
        assert_eq!(bounds.max_y(), 7.0);
    }

    #[test]
    fn test_transform_is_applied() {
        let line = Line::new(
            Color::default(),
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 5.0),
        );
        let transform = Transform::scale(2.0, 2.0).then(&Transform::translation(1.0, -1.0));

        let mut renderer = BoundsRenderer::new();
        line.draw(&mut renderer, &transform);

        let bounds = renderer.bounds().unwrap();
        assert_eq!(bounds.min_x(), 1.0);
        assert_eq!(bounds.min_y(), -1.0);
        assert_eq!(bounds.max_x(), 21.0);
        assert_eq!(bounds.max_y(), 9.0);
    }
}
