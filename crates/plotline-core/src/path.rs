//! Sampleable path segments.
//!
//! A planned trajectory is an ordered sequence of segments, each of which can be
//! evaluated at a normalized parameter `t ∈ [0, 1]` to yield a [`Pose2`]. `t = 0`
//! and `t = 1` are the segment endpoints. Evaluation is pure, so segments can be
//! sampled repeatedly and in any order.
//!
//! # Overview
//!
//! - [`PathSegment`] - The sampling capability consumed by the Path drawable
//! - [`LinearSegment`] - A straight move between two points
//! - [`BezierSegment`] - A cubic Bézier curve
//! - [`TurnSegment`] - A circular turning arc starting from a pose
//! - [`linear_segments`] / [`smooth_segments`] - Build segment chains through waypoints

use std::{f32::consts::FRAC_PI_2, fmt::Debug};

use crate::geometry::{Pose2, Vector2};

/// Derivative magnitude below which a tangent is considered degenerate.
const TANGENT_EPSILON: f32 = 1e-6;

/// A continuous path piece that can be sampled at a normalized parameter.
pub trait PathSegment: Debug {
    /// Evaluates the segment at `t`, which must lie in `[0, 1]`.
    ///
    /// Implementations panic when `t` is out of range.
    fn interpolate(&self, t: f32) -> Pose2;
}

impl<S: PathSegment + ?Sized> PathSegment for Box<S> {
    fn interpolate(&self, t: f32) -> Pose2 {
        (**self).interpolate(t)
    }
}

fn check_parameter(t: f32) {
    assert!(
        (0.0..=1.0).contains(&t),
        "path parameter {t} is outside [0, 1]"
    );
}

/// Heading angle of a direction vector, measured from +Y toward +X.
fn heading_of(direction: Vector2) -> f32 {
    direction.x().atan2(direction.y())
}

/// A straight move from `start` to `end`.
///
/// Every sample carries the heading of the whole move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSegment {
    start: Vector2,
    end: Vector2,
}

impl LinearSegment {
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Vector2 {
        self.start
    }

    pub fn end(&self) -> Vector2 {
        self.end
    }
}

impl PathSegment for LinearSegment {
    fn interpolate(&self, t: f32) -> Pose2 {
        check_parameter(t);
        Pose2::new(
            self.start.lerp(self.end, t),
            heading_of(self.end.sub(self.start)),
        )
    }
}

/// A cubic Bézier curve from `p0` to `p3` with control points `p1` and `p2`.
///
/// The orientation of each sample follows the curve tangent. Where the tangent
/// vanishes the chord direction is used instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    p0: Vector2,
    p1: Vector2,
    p2: Vector2,
    p3: Vector2,
}

impl BezierSegment {
    pub fn new(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Returns the four defining points in order
    pub fn points(&self) -> [Vector2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    fn derivative(&self, t: f32) -> Vector2 {
        let u = 1.0 - t;
        self.p1
            .sub(self.p0)
            .scale(3.0 * u * u)
            .add(self.p2.sub(self.p1).scale(6.0 * u * t))
            .add(self.p3.sub(self.p2).scale(3.0 * t * t))
    }
}

impl PathSegment for BezierSegment {
    fn interpolate(&self, t: f32) -> Pose2 {
        check_parameter(t);
        let u = 1.0 - t;
        let position = self
            .p0
            .scale(u * u * u)
            .add(self.p1.scale(3.0 * u * u * t))
            .add(self.p2.scale(3.0 * u * t * t))
            .add(self.p3.scale(t * t * t));

        let tangent = self.derivative(t);
        let direction = if tangent.length() > TANGENT_EPSILON {
            tangent
        } else {
            self.p3.sub(self.p0)
        };

        Pose2::new(position, heading_of(direction))
    }
}

/// A circular turning arc.
///
/// The arc starts at `start`, tangent to its heading, and sweeps through
/// `angle` radians of heading change. Positive angles turn toward +X from +Y
/// (clockwise when +Y points up); negative angles turn the other way. A
/// non-positive radius or a zero angle describes a turn in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnSegment {
    start: Pose2,
    radius: f32,
    angle: f32,
}

impl TurnSegment {
    pub fn new(start: Pose2, radius: f32, angle: f32) -> Self {
        Self {
            start,
            radius,
            angle,
        }
    }

    pub fn start(&self) -> Pose2 {
        self.start
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Signed sweep of the turn in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    fn side(&self) -> f32 {
        if self.angle < 0.0 { -1.0 } else { 1.0 }
    }

    fn is_in_place(&self) -> bool {
        self.radius <= 0.0 || self.angle == 0.0
    }

    /// Center of the turning circle
    pub fn center(&self) -> Vector2 {
        let normal = Pose2::new(
            Vector2::default(),
            self.start.orientation() + self.side() * FRAC_PI_2,
        )
        .heading();
        self.start
            .position()
            .add(normal.scale(self.radius.max(0.0)))
    }

    /// Pose reached at the end of the turn
    pub fn end_pose(&self) -> Pose2 {
        self.interpolate(1.0)
    }
}

impl PathSegment for TurnSegment {
    fn interpolate(&self, t: f32) -> Pose2 {
        check_parameter(t);
        if self.is_in_place() {
            return Pose2::new(
                self.start.position(),
                self.start.orientation() + self.angle * t,
            );
        }

        let orientation = self.start.orientation() + self.angle * t;
        let spoke = Pose2::new(Vector2::default(), orientation + self.side() * FRAC_PI_2)
            .heading()
            .scale(self.radius);
        Pose2::new(self.center().sub(spoke), orientation)
    }
}

/// Builds one [`LinearSegment`] per consecutive pair of waypoints.
///
/// Fewer than two waypoints yields no segments.
pub fn linear_segments(points: &[Vector2]) -> Vec<LinearSegment> {
    points
        .windows(2)
        .map(|pair| LinearSegment::new(pair[0], pair[1]))
        .collect()
}

/// Builds a smooth chain of cubic Bézier segments passing through every waypoint.
///
/// Control points are chosen so consecutive segments share first and second
/// derivatives at each interior waypoint. They come from solving the tridiagonal
/// system
///
/// ```text
/// 2·P1[0]            +   P1[1]  = K[0]   + 2·K[1]
///   P1[i-1] + 4·P1[i] +   P1[i+1] = 4·K[i] + 2·K[i+1]
/// 2·P1[n-2] + 7·P1[n-1]          = 8·K[n-1] + K[n]
/// ```
///
/// with the Thomas algorithm, then `P2[i] = 2·K[i+1] - P1[i+1]` and
/// `P2[n-1] = (K[n] + P1[n-1]) / 2`.
///
/// A single pair of waypoints yields one straight Bézier; fewer than two yields none.
pub fn smooth_segments(points: &[Vector2]) -> Vec<BezierSegment> {
    let n = points.len().saturating_sub(1);
    match n {
        0 => return Vec::new(),
        1 => {
            let (start, end) = (points[0], points[1]);
            return vec![BezierSegment::new(
                start,
                start.lerp(end, 1.0 / 3.0),
                start.lerp(end, 2.0 / 3.0),
                end,
            )];
        }
        _ => {}
    }

    let mut a = vec![1.0f32; n];
    let mut b = vec![4.0f32; n];
    let mut c = vec![1.0f32; n];
    let mut r: Vec<Vector2> = (0..n)
        .map(|i| points[i].scale(4.0).add(points[i + 1].scale(2.0)))
        .collect();

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = points[0].add(points[1].scale(2.0));

    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    c[n - 1] = 0.0;
    r[n - 1] = points[n - 1].scale(8.0).add(points[n]);

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m * c[i - 1];
        r[i] = r[i].sub(r[i - 1].scale(m));
    }

    let mut p1 = vec![Vector2::default(); n];
    p1[n - 1] = r[n - 1].scale(1.0 / b[n - 1]);
    for i in (0..n - 1).rev() {
        p1[i] = r[i].sub(p1[i + 1].scale(c[i])).scale(1.0 / b[i]);
    }

    let p2: Vec<Vector2> = (0..n)
        .map(|i| {
            if i < n - 1 {
                points[i + 1].scale(2.0).sub(p1[i + 1])
            } else {
                points[n].add(p1[n - 1]).scale(0.5)
            }
        })
        .collect();

    (0..n)
        .map(|i| BezierSegment::new(points[i], p1[i], p2[i], points[i + 1]))
        .collect()
}
