//! Geometric primitives for trajectory scenes.
//!
//! This module provides the fundamental geometric types consumed and produced
//! by drawables and renderers.
//!
//! # Overview
//!
//! - [`Vector2`] - A 2D coordinate or displacement
//! - [`Pose2`] - A position plus heading, as sampled along a path
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Transform`] - A 2D affine transform applied to whole paths before rendering
//!
//! # Heading Convention
//!
//! Orientations are in radians and measured from the +Y axis toward the +X axis,
//! so a pose with orientation `o` faces along `(sin o, cos o)`:
//!
//! ```text
//!        +Y  (o = 0)
//!         ▲
//!         │
//!         │
//!         └──────► +X  (o = π/2)
//! ```
//!
//! This is the convention robot planners use when they compute headings with
//! `atan2(dx, dy)`.

/// A 2D vector in scene coordinate space.
///
/// # Examples
///
/// ```
/// # use plotline_core::geometry::Vector2;
/// let a = Vector2::new(10.0, 20.0);
/// let b = Vector2::new(5.0, 5.0);
///
/// let sum = a.add(b);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = a.lerp(b, 0.5);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    x: f32,
    y: f32,
}

impl Vector2 {
    /// Creates a new vector with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another vector to this one, returning a new vector
    pub fn add(self, other: Vector2) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another vector from this one, returning a new vector
    pub fn sub(self, other: Vector2) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean length of the vector
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another vector
    pub fn distance(self, other: Vector2) -> f32 {
        other.sub(self).length()
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Vector2, t: f32) -> Self {
        self.add(other.sub(self).scale(t))
    }

    /// Returns true when both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A position plus heading along a trajectory.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose2 {
    position: Vector2,
    orientation: f32,
}

impl Pose2 {
    pub fn new(position: Vector2, orientation: f32) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Returns the position of the pose
    pub fn position(self) -> Vector2 {
        self.position
    }

    /// Returns the orientation in radians
    pub fn orientation(self) -> f32 {
        self.orientation
    }

    /// Unit vector pointing along the orientation, `(sin o, cos o)`.
    pub fn heading(self) -> Vector2 {
        let (sin, cos) = self.orientation.sin_cos();
        Vector2::new(sin, cos)
    }
}

/// Represents the dimensions of a canvas or box with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds centered on `center` extending `half_width` and
    /// `half_height` to either side.
    pub fn new_from_center(center: Vector2, half_width: f32, half_height: f32) -> Self {
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates the square box `[center - radius, center + radius]`.
    pub fn around(center: Vector2, radius: f32) -> Self {
        Self::new_from_center(center, radius, radius)
    }

    /// Creates bounds spanning two opposite corners given in any order
    pub fn from_corners(a: Vector2, b: Vector2) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Vector2 {
        Vector2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the four corners, clockwise from the minimum corner
    pub fn corners(self) -> [Vector2; 4] {
        [
            Vector2::new(self.min_x, self.min_y),
            Vector2::new(self.max_x, self.min_y),
            Vector2::new(self.max_x, self.max_y),
            Vector2::new(self.min_x, self.max_y),
        ]
    }

    /// Returns the smallest bounds containing both `self` and `other`
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns the smallest bounds containing `self` and `point`
    pub fn include_point(&self, point: Vector2) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Grows the bounds by `padding` on every side
    pub fn add_padding(&self, padding: f32) -> Self {
        Self {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            max_x: self.max_x + padding,
            max_y: self.max_y + padding,
        }
    }
}

/// A 2D affine transform.
///
/// Maps `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`, the same layout as
/// an SVG `matrix(a b c d tx ty)`.
///
/// # Examples
///
/// ```
/// # use plotline_core::geometry::{Transform, Vector2};
/// let t = Transform::scale(2.0, 2.0).then(&Transform::translation(10.0, 0.0));
/// let p = t.apply(Vector2::new(1.0, 1.0));
/// assert_eq!(p, Vector2::new(12.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    tx: f32,
    ty: f32,
}

impl Transform {
    pub fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn translation(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `angle` radians about the origin
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Shear with `x' = x + sx·y` and `y' = sy·x + y`
    pub fn shear(sx: f32, sy: f32) -> Self {
        Self::new(1.0, sy, sx, 1.0, 0.0, 0.0)
    }

    /// Returns the transform that applies `self` first and then `other`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            a: other.a * self.a + other.c * self.b,
            b: other.b * self.a + other.d * self.b,
            c: other.a * self.c + other.c * self.d,
            d: other.b * self.c + other.d * self.d,
            tx: other.a * self.tx + other.c * self.ty + other.tx,
            ty: other.b * self.tx + other.d * self.ty + other.ty,
        }
    }

    /// Maps a point through the transform
    pub fn apply(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns the transform as an SVG `transform` attribute value
    pub fn to_svg_matrix(&self) -> String {
        format!(
            "matrix({} {} {} {} {} {})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_vector_default() {
        let v = Vector2::default();
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, 2.0);

        assert_eq!(a.add(b), Vector2::new(4.0, 6.0));
        assert_eq!(a.sub(b), Vector2::new(2.0, 2.0));
        assert_eq!(a.scale(2.0), Vector2::new(6.0, 8.0));
        assert_approx_eq!(f32, a.length(), 5.0);
        assert_approx_eq!(f32, a.distance(b), 8.0f32.sqrt());
    }

    #[test]
    fn test_vector_lerp_endpoints() {
        let a = Vector2::new(-2.0, 7.0);
        let b = Vector2::new(6.0, -1.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.25), Vector2::new(0.0, 5.0));
    }

    #[test]
    fn test_vector_is_finite() {
        assert!(Vector2::new(1.0, 2.0).is_finite());
        assert!(!Vector2::new(f32::NAN, 2.0).is_finite());
        assert!(!Vector2::new(1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_pose_heading() {
        let north = Pose2::new(Vector2::default(), 0.0);
        assert_approx_eq!(f32, north.heading().x(), 0.0);
        assert_approx_eq!(f32, north.heading().y(), 1.0);

        let east = Pose2::new(Vector2::new(5.0, 5.0), FRAC_PI_2);
        assert_approx_eq!(f32, east.heading().x(), 1.0);
        assert_approx_eq!(f32, east.heading().y(), 0.0, epsilon = 1e-6);
        assert_eq!(east.position(), Vector2::new(5.0, 5.0));
    }

    #[test]
    fn test_bounds_around() {
        let bounds = Bounds::around(Vector2::new(5.0, 5.0), 2.0);
        assert_eq!(bounds.min_x(), 3.0);
        assert_eq!(bounds.min_y(), 3.0);
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 4.0);
        assert_eq!(bounds.center(), Vector2::new(5.0, 5.0));
    }

    #[test]
    fn test_bounds_from_corners_normalizes() {
        let bounds = Bounds::from_corners(Vector2::new(10.0, -2.0), Vector2::new(-4.0, 6.0));
        assert_eq!(bounds.min_x(), -4.0);
        assert_eq!(bounds.min_y(), -2.0);
        assert_eq!(bounds.max_x(), 10.0);
        assert_eq!(bounds.max_y(), 6.0);
    }

    #[test]
    fn test_bounds_include_and_merge() {
        let bounds = Bounds::around(Vector2::default(), 1.0);
        let grown = bounds.include_point(Vector2::new(5.0, -3.0));
        assert_eq!(grown.max_x(), 5.0);
        assert_eq!(grown.min_y(), -3.0);

        let other = Bounds::from_corners(Vector2::new(-8.0, 0.0), Vector2::new(0.0, 9.0));
        let merged = grown.merge(&other);
        assert_eq!(merged.min_x(), -8.0);
        assert_eq!(merged.max_y(), 9.0);
    }

    #[test]
    fn test_bounds_padding_and_corners() {
        let bounds = Bounds::around(Vector2::default(), 1.0).add_padding(2.0);
        assert_eq!(bounds.width(), 6.0);
        let corners = bounds.corners();
        assert_eq!(corners[0], Vector2::new(-3.0, -3.0));
        assert_eq!(corners[2], Vector2::new(3.0, 3.0));
    }

    #[test]
    fn test_transform_identity() {
        let p = Vector2::new(3.0, -7.0);
        assert_eq!(Transform::identity().apply(p), p);
        assert!(Transform::default().is_identity());
        assert!(!Transform::translation(1.0, 0.0).is_identity());
    }

    #[test]
    fn test_transform_rotation() {
        let p = Transform::rotation(FRAC_PI_2).apply(Vector2::new(1.0, 0.0));
        assert_approx_eq!(f32, p.x(), 0.0, epsilon = 1e-6);
        assert_approx_eq!(f32, p.y(), 1.0);
    }

    #[test]
    fn test_transform_shear() {
        let p = Transform::shear(2.0, 0.0).apply(Vector2::new(1.0, 3.0));
        assert_eq!(p, Vector2::new(7.0, 3.0));
    }

    #[test]
    fn test_transform_then_order() {
        let scale_then_move = Transform::scale(2.0, 3.0).then(&Transform::translation(1.0, 1.0));
        assert_eq!(
            scale_then_move.apply(Vector2::new(1.0, 1.0)),
            Vector2::new(3.0, 4.0)
        );

        let move_then_scale = Transform::translation(1.0, 1.0).then(&Transform::scale(2.0, 3.0));
        assert_eq!(
            move_then_scale.apply(Vector2::new(1.0, 1.0)),
            Vector2::new(4.0, 6.0)
        );
    }

    #[test]
    fn test_transform_svg_matrix() {
        assert_eq!(
            Transform::translation(5.0, -2.5).to_svg_matrix(),
            "matrix(1 0 0 1 5 -2.5)"
        );
    }
}
