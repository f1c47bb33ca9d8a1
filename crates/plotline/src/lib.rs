//! Plotline - Render robot trajectory plans as vector scenes.
//!
//! Parsing, scene assembly and SVG rendering for trajectory plans. A plan is a
//! TOML description of traces, turns, markers and the robot's pose; it is
//! turned into a tree of drawables from [`plotline_core`] and drawn onto an
//! SVG canvas.

pub mod config;
pub mod export;
pub mod plan;
pub mod scene;
pub mod view;

mod error;

pub use plotline_core::{color, draw, geometry, path};

pub use error::PlotlineError;

use log::{debug, info, trace};

use config::AppConfig;
use draw::Drawable;
use export::SvgRenderer;
use plan::Plan;
use scene::Scene;

/// Builder for parsing and rendering trajectory plans.
///
/// # Examples
///
/// ```rust
/// use plotline::{PlotBuilder, config::AppConfig};
///
/// let source = r#"
///     [[trace]]
///     waypoints = [[0, 0], [100, 40], [200, 0]]
///     curve = "smooth"
/// "#;
///
/// let builder = PlotBuilder::new(AppConfig::default());
/// let plan = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&plan).expect("Failed to render");
/// assert!(svg.contains("<path"));
/// ```
#[derive(Default)]
pub struct PlotBuilder {
    config: AppConfig,
}

impl PlotBuilder {
    /// Create a new plot builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including canvas and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse plan source into a validated [`Plan`].
    ///
    /// # Errors
    ///
    /// Returns [`PlotlineError::Parse`] for malformed TOML or unknown fields,
    /// and [`PlotlineError::Plan`] for entries that fail validation.
    pub fn parse(&self, source: &str) -> Result<Plan, PlotlineError> {
        info!("Parsing plan");

        let plan: Plan =
            toml::from_str(source).map_err(|err| PlotlineError::new_parse_error(err, source))?;
        plan.validate()?;

        debug!("Plan parsed successfully");
        trace!(plan:?; "Parsed plan");

        Ok(plan)
    }

    /// Build the drawable scene for a plan using the configured style.
    ///
    /// # Errors
    ///
    /// Returns [`PlotlineError::Plan`] if an entry cannot be turned into a drawable.
    pub fn build_scene(&self, plan: &Plan) -> Result<Scene, PlotlineError> {
        Scene::from_plan(plan, self.config.style())
    }

    /// Render a plan to an SVG string.
    ///
    /// The scene is measured, fitted into the configured canvas and drawn once.
    ///
    /// # Errors
    ///
    /// Returns [`PlotlineError::Plan`] for entries that cannot be drawn and
    /// [`PlotlineError::Export`] for an unusable canvas configuration.
    pub fn render_svg(&self, plan: &Plan) -> Result<String, PlotlineError> {
        let canvas = self.config.canvas();
        canvas.validate()?;

        let scene = self.build_scene(plan)?;
        let bounds = scene.bounds();
        debug!(bounds:?; "Scene measured");

        let transform = view::fit_transform(bounds, canvas);
        let mut renderer = SvgRenderer::new(self.config.style().stroke_width());
        scene.draw(&mut renderer, &transform);
        info!(elements = renderer.len(); "Scene drawn");

        let document = renderer.finish(canvas.size(), self.config.style().background_color());

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }
}
