//! Plan file model.
//!
//! A plan describes one trajectory scene in TOML. Every section is optional:
//!
//! ```toml
//! [[trace]]
//! color = "steelblue"
//! waypoints = [[0, 0], [100, 50], [200, 0]]
//! curve = "smooth"
//! arrows = 3
//!
//! [[turn]]
//! start = [200, 0]
//! heading = 1.57
//! radius = 40
//! angle = 3.14
//!
//! [robot]
//! position = [0, 0]
//! orientation = 0.5
//! ```
//!
//! Entries without a color take the matching default from
//! [`StyleConfig`](crate::config::StyleConfig).

use std::num::NonZeroUsize;

use serde::Deserialize;

use plotline_core::{
    color::Color,
    draw::{Arrow, Circle, Drawable, Line, Path, Turn, arrow_at_pose},
    geometry::{Pose2, Vector2},
    path::{PathSegment, TurnSegment, linear_segments, smooth_segments},
};

use crate::{PlotlineError, config::StyleConfig};

/// Radius of the filled marker drawn at the robot's current position.
pub const ROBOT_MARKER_RADIUS: f32 = 6.0;

/// Largest number of heading arrowheads a single trace may request.
pub const MAX_TRACE_ARROWS: usize = 1_000;

/// Largest per-segment sample count a trace may request.
pub const MAX_TRACE_RESOLUTION: usize = 10_000;

type Point = [f32; 2];

fn vector(point: Point) -> Vector2 {
    Vector2::new(point[0], point[1])
}

/// A parsed trajectory plan.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    #[serde(default, rename = "trace")]
    traces: Vec<TracePlan>,

    #[serde(default, rename = "line")]
    lines: Vec<LinePlan>,

    #[serde(default, rename = "turn")]
    turns: Vec<TurnPlan>,

    #[serde(default, rename = "circle")]
    circles: Vec<CirclePlan>,

    #[serde(default, rename = "arrow")]
    arrows: Vec<ArrowPlan>,

    #[serde(default)]
    robot: Option<RobotPlan>,
}

impl Plan {
    pub fn traces(&self) -> &[TracePlan] {
        &self.traces
    }

    pub fn lines(&self) -> &[LinePlan] {
        &self.lines
    }

    pub fn turns(&self) -> &[TurnPlan] {
        &self.turns
    }

    pub fn circles(&self) -> &[CirclePlan] {
        &self.circles
    }

    pub fn arrows(&self) -> &[ArrowPlan] {
        &self.arrows
    }

    pub fn robot(&self) -> Option<&RobotPlan> {
        self.robot.as_ref()
    }

    /// Returns true when the plan contains nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
            && self.lines.is_empty()
            && self.turns.is_empty()
            && self.circles.is_empty()
            && self.arrows.is_empty()
            && self.robot.is_none()
    }

    /// Checks every entry for unparsable colors, non-finite numbers and
    /// unusable trace settings.
    ///
    /// # Errors
    ///
    /// Returns [`PlotlineError::Plan`] naming the first offending entry.
    pub fn validate(&self) -> Result<(), PlotlineError> {
        for (index, trace) in self.traces.iter().enumerate() {
            trace.validate(&Entry::new("trace", index))?;
        }
        for (index, line) in self.lines.iter().enumerate() {
            line.validate(&Entry::new("line", index))?;
        }
        for (index, turn) in self.turns.iter().enumerate() {
            turn.validate(&Entry::new("turn", index))?;
        }
        for (index, circle) in self.circles.iter().enumerate() {
            circle.validate(&Entry::new("circle", index))?;
        }
        for (index, arrow) in self.arrows.iter().enumerate() {
            arrow.validate(&Entry::new("arrow", index))?;
        }
        if let Some(robot) = &self.robot {
            robot.validate(&Entry::new("robot", 0))?;
        }
        Ok(())
    }
}

/// Names a plan entry in error messages, e.g. `trace #2`.
struct Entry {
    kind: &'static str,
    index: usize,
}

impl Entry {
    fn new(kind: &'static str, index: usize) -> Self {
        Self { kind, index }
    }

    fn error(&self, message: impl std::fmt::Display) -> PlotlineError {
        PlotlineError::Plan(format!("{} #{}: {message}", self.kind, self.index + 1))
    }

    fn color(&self, raw: Option<&str>, fallback: Color) -> Result<Color, PlotlineError> {
        match raw {
            Some(raw) => Color::new(raw).map_err(|err| self.error(err)),
            None => Ok(fallback),
        }
    }

    fn finite(&self, name: &str, value: f32) -> Result<(), PlotlineError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(self.error(format!("`{name}` must be finite, got {value}")))
        }
    }

    fn non_negative(&self, name: &str, value: f32) -> Result<(), PlotlineError> {
        self.finite(name, value)?;
        if value < 0.0 {
            return Err(self.error(format!("`{name}` must not be negative, got {value}")));
        }
        Ok(())
    }

    fn point(&self, name: &str, point: Point) -> Result<(), PlotlineError> {
        if vector(point).is_finite() {
            Ok(())
        } else {
            Err(self.error(format!(
                "`{name}` must have finite coordinates, got [{}, {}]",
                point[0], point[1]
            )))
        }
    }
}

/// How a trace connects its waypoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    /// Straight segments between consecutive waypoints.
    #[default]
    Linear,
    /// A C²-continuous chain of cubic Béziers through every waypoint.
    Smooth,
}

/// A trajectory through a list of waypoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TracePlan {
    color: Option<String>,
    waypoints: Vec<Point>,
    #[serde(default)]
    curve: Curve,
    resolution: Option<usize>,
    #[serde(default)]
    arrows: usize,
    arrow_size: Option<f32>,
}

impl TracePlan {
    pub fn waypoints(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.waypoints.iter().copied().map(vector)
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Number of heading arrowheads spread along the trace.
    pub fn arrow_count(&self) -> usize {
        self.arrows
    }

    fn validate(&self, entry: &Entry) -> Result<(), PlotlineError> {
        entry.color(self.color.as_deref(), Color::default())?;
        if self.waypoints.len() < 2 {
            return Err(entry.error(format!(
                "a trace needs at least 2 waypoints, got {}",
                self.waypoints.len()
            )));
        }
        for point in &self.waypoints {
            entry.point("waypoints", *point)?;
        }
        match self.resolution {
            Some(0) => return Err(entry.error("`resolution` must be at least 1")),
            Some(resolution) if resolution > MAX_TRACE_RESOLUTION => {
                return Err(entry.error(format!(
                    "`resolution` must be at most {MAX_TRACE_RESOLUTION}, got {resolution}"
                )));
            }
            _ => {}
        }
        if self.arrows > MAX_TRACE_ARROWS {
            return Err(entry.error(format!(
                "`arrows` must be at most {MAX_TRACE_ARROWS}, got {}",
                self.arrows
            )));
        }
        if let Some(size) = self.arrow_size {
            entry.non_negative("arrow_size", size)?;
        }
        Ok(())
    }

    fn segments(&self) -> Vec<Box<dyn PathSegment>> {
        let points: Vec<Vector2> = self.waypoints().collect();
        match self.curve {
            Curve::Linear => linear_segments(&points)
                .into_iter()
                .map(|segment| Box::new(segment) as Box<dyn PathSegment>)
                .collect(),
            Curve::Smooth => smooth_segments(&points)
                .into_iter()
                .map(|segment| Box::new(segment) as Box<dyn PathSegment>)
                .collect(),
        }
    }

    /// Builds the trace's path followed by its heading arrowheads.
    pub(crate) fn drawables(
        &self,
        index: usize,
        style: &StyleConfig,
    ) -> Result<Vec<Box<dyn Drawable>>, PlotlineError> {
        let entry = Entry::new("trace", index);
        let color = entry.color(self.color.as_deref(), style.trace_color())?;
        let segments = self.segments();
        let headings = sample_evenly(&segments, self.arrows);

        let mut path = Path::new(color, segments);
        if let Some(resolution) = self.resolution {
            let resolution = NonZeroUsize::new(resolution)
                .ok_or_else(|| entry.error("`resolution` must be at least 1"))?;
            path = path.with_resolution(resolution);
        }

        let size = self.arrow_size.unwrap_or(style.arrow_size());
        let mut drawables: Vec<Box<dyn Drawable>> = vec![Box::new(path)];
        drawables.extend(headings.into_iter().map(|pose| {
            Box::new(arrow_at_pose(style.arrow_color(), pose, size)) as Box<dyn Drawable>
        }));
        Ok(drawables)
    }
}

/// Samples `count` poses spread evenly over the parameter range of a segment
/// chain, excluding both ends.
fn sample_evenly(segments: &[Box<dyn PathSegment>], count: usize) -> Vec<Pose2> {
    if segments.is_empty() {
        return Vec::new();
    }

    let total = segments.len() as f32;
    (1..=count)
        .map(|i| {
            let u = i as f32 / (count + 1) as f32 * total;
            let index = (u.floor() as usize).min(segments.len() - 1);
            let t = (u - index as f32).clamp(0.0, 1.0);
            segments[index].interpolate(t)
        })
        .collect()
}

/// A single straight stroke.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinePlan {
    color: Option<String>,
    from: Point,
    to: Point,
}

impl LinePlan {
    fn validate(&self, entry: &Entry) -> Result<(), PlotlineError> {
        entry.color(self.color.as_deref(), Color::default())?;
        entry.point("from", self.from)?;
        entry.point("to", self.to)
    }

    pub(crate) fn drawable(&self, index: usize, style: &StyleConfig) -> Result<Line, PlotlineError> {
        let color = Entry::new("line", index).color(self.color.as_deref(), style.trace_color())?;
        Ok(Line::new(color, vector(self.from), vector(self.to)))
    }
}

/// A planned turn, drawn as its turning circle.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TurnPlan {
    color: Option<String>,
    start: Point,
    #[serde(default)]
    heading: f32,
    radius: f32,
    angle: f32,
}

impl TurnPlan {
    /// The turn as a sampleable arc.
    pub fn segment(&self) -> TurnSegment {
        TurnSegment::new(Pose2::new(vector(self.start), self.heading), self.radius, self.angle)
    }

    fn validate(&self, entry: &Entry) -> Result<(), PlotlineError> {
        entry.color(self.color.as_deref(), Color::default())?;
        entry.point("start", self.start)?;
        entry.finite("heading", self.heading)?;
        entry.non_negative("radius", self.radius)?;
        entry.finite("angle", self.angle)
    }

    pub(crate) fn drawable(&self, index: usize, style: &StyleConfig) -> Result<Turn, PlotlineError> {
        let color = Entry::new("turn", index).color(self.color.as_deref(), style.turn_color())?;
        Ok(Turn::from_segment(color, self.segment()))
    }
}

/// A stroked or filled circle.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CirclePlan {
    color: Option<String>,
    center: Point,
    radius: f32,
    #[serde(default)]
    fill: bool,
}

impl CirclePlan {
    fn validate(&self, entry: &Entry) -> Result<(), PlotlineError> {
        entry.color(self.color.as_deref(), Color::default())?;
        entry.point("center", self.center)?;
        entry.non_negative("radius", self.radius)
    }

    pub(crate) fn drawable(&self, index: usize, style: &StyleConfig) -> Result<Circle, PlotlineError> {
        let color =
            Entry::new("circle", index).color(self.color.as_deref(), style.marker_color())?;
        Ok(Circle::new(color, vector(self.center), self.radius, self.fill))
    }
}

/// A standalone arrowhead.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArrowPlan {
    color: Option<String>,
    position: Point,
    #[serde(default)]
    orientation: f32,
    size: Option<f32>,
}

impl ArrowPlan {
    fn validate(&self, entry: &Entry) -> Result<(), PlotlineError> {
        entry.color(self.color.as_deref(), Color::default())?;
        entry.point("position", self.position)?;
        entry.finite("orientation", self.orientation)?;
        if let Some(size) = self.size {
            entry.non_negative("size", size)?;
        }
        Ok(())
    }

    pub(crate) fn drawable(&self, index: usize, style: &StyleConfig) -> Result<Arrow, PlotlineError> {
        let color = Entry::new("arrow", index).color(self.color.as_deref(), style.arrow_color())?;
        Ok(Arrow::new(
            color,
            vector(self.position),
            self.orientation,
            self.size.unwrap_or(style.arrow_size()),
        ))
    }
}

/// The robot's current pose.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotPlan {
    color: Option<String>,
    position: Point,
    #[serde(default)]
    orientation: f32,
}

impl RobotPlan {
    pub fn pose(&self) -> Pose2 {
        Pose2::new(vector(self.position), self.orientation)
    }

    fn validate(&self, entry: &Entry) -> Result<(), PlotlineError> {
        entry.color(self.color.as_deref(), Color::default())?;
        entry.point("position", self.position)?;
        entry.finite("orientation", self.orientation)
    }

    /// Builds a filled marker at the robot's position and an arrowhead ahead
    /// of it pointing along its heading.
    pub(crate) fn drawables(&self, style: &StyleConfig) -> Result<Vec<Box<dyn Drawable>>, PlotlineError> {
        let color = Entry::new("robot", 0).color(self.color.as_deref(), style.marker_color())?;
        let pose = self.pose();
        let size = style.arrow_size();
        let apex = pose
            .position()
            .add(pose.heading().scale(ROBOT_MARKER_RADIUS + size));

        Ok(vec![
            Box::new(Circle::new(color, pose.position(), ROBOT_MARKER_RADIUS, true)),
            Box::new(arrow_at_pose(color, Pose2::new(apex, pose.orientation()), size)),
        ])
    }
}
