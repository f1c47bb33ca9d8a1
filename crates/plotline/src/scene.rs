//! Scene assembly from a plan.

use log::{debug, info};

use plotline_core::{
    draw::{BoundsRenderer, Compound, Drawable, Renderer},
    geometry::{Bounds, Transform},
};

use crate::{PlotlineError, config::StyleConfig, plan::Plan};

/// A drawable tree built once from a [`Plan`].
///
/// The root is a [`Compound`] holding, in draw order: traces, lines, turns,
/// circles, arrows and finally the robot marker.
#[derive(Debug)]
pub struct Scene {
    root: Compound,
}

impl Scene {
    /// Builds the drawable tree for `plan`, filling in colors and sizes the
    /// plan leaves unset from `style`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotlineError::Plan`] if an entry cannot be turned into a
    /// drawable, for example because of an unparsable color.
    pub fn from_plan(plan: &Plan, style: &StyleConfig) -> Result<Self, PlotlineError> {
        info!(
            traces = plan.traces().len(),
            lines = plan.lines().len(),
            turns = plan.turns().len(),
            circles = plan.circles().len(),
            arrows = plan.arrows().len(),
            robot = plan.robot().is_some();
            "Building scene"
        );

        let mut drawables: Vec<Box<dyn Drawable>> = Vec::new();

        for (index, trace) in plan.traces().iter().enumerate() {
            drawables.extend(trace.drawables(index, style)?);
        }
        for (index, line) in plan.lines().iter().enumerate() {
            drawables.push(Box::new(line.drawable(index, style)?));
        }
        for (index, turn) in plan.turns().iter().enumerate() {
            drawables.push(Box::new(turn.drawable(index, style)?));
        }
        for (index, circle) in plan.circles().iter().enumerate() {
            drawables.push(Box::new(circle.drawable(index, style)?));
        }
        for (index, arrow) in plan.arrows().iter().enumerate() {
            drawables.push(Box::new(arrow.drawable(index, style)?));
        }
        if let Some(robot) = plan.robot() {
            drawables.extend(robot.drawables(style)?);
        }

        debug!(drawables = drawables.len(); "Scene built");
        Ok(Self {
            root: Compound::new(drawables),
        })
    }

    pub fn root(&self) -> &Compound {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Measures the extent of the scene in plan coordinates.
    ///
    /// Returns `None` for a scene that paints nothing.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut renderer = BoundsRenderer::new();
        self.root.draw(&mut renderer, &Transform::identity());
        renderer.bounds()
    }
}

impl Drawable for Scene {
    fn draw(&self, renderer: &mut dyn Renderer, transform: &Transform) {
        self.root.draw(renderer, transform);
    }
}
