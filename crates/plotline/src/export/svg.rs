//! SVG output for drawable scenes.

use log::{debug, trace};
use svg::{Document, node::element as svg_element};

use plotline_core::{
    color::Color,
    draw::Renderer,
    geometry::{Bounds, Size, Transform, Vector2},
};

/// A [`Renderer`] that turns every stroke or fill into an SVG `<path>`.
///
/// Path data is kept in the coordinates the drawables supply. The transform
/// applied to a path is written as a `matrix(...)` attribute, and strokes use
/// `vector-effect="non-scaling-stroke"` so the stroke width stays in output
/// pixels whatever the view scale.
#[derive(Debug)]
pub struct SvgRenderer {
    stroke_color: Color,
    fill_color: Color,
    stroke_width: f32,
    data: String,
    transform: Transform,
    elements: Vec<svg_element::Path>,
}

impl SvgRenderer {
    pub fn new(stroke_width: f32) -> Self {
        Self {
            stroke_color: Color::default(),
            fill_color: Color::default(),
            stroke_width,
            data: String::new(),
            transform: Transform::identity(),
            elements: Vec::new(),
        }
    }

    /// Number of `<path>` elements emitted so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Assembles the emitted paths into a document of the given size, on top
    /// of an optional background.
    pub fn finish(self, size: Size, background: Option<Color>) -> Document {
        debug!(elements = self.elements.len(); "Finishing SVG document");

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height());

        if let Some(color) = background {
            let bg = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            doc = doc.add(bg);
        }

        for element in self.elements {
            doc = doc.add(element);
        }
        doc
    }

    fn push_point(&mut self, command: char, point: Vector2) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data
            .push_str(&format!("{command} {} {}", point.x(), point.y()));
    }

    /// Starts an element for the current path, or `None` if the path is empty.
    fn current_element(&self) -> Option<svg_element::Path> {
        if self.data.is_empty() {
            trace!("Skipping empty path");
            return None;
        }

        let mut element = svg_element::Path::new().set("d", self.data.clone());
        if !self.transform.is_identity() {
            element = element.set("transform", self.transform.to_svg_matrix());
        }
        Some(element)
    }
}

/// Path data for an ellipse inscribed in `bounds`, drawn as two half arcs.
fn oval_data(bounds: Bounds) -> String {
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    let cy = bounds.center().y();
    format!(
        "M {} {} A {rx} {ry} 0 1 0 {} {} A {rx} {ry} 0 1 0 {} {} Z",
        bounds.min_x(),
        cy,
        bounds.max_x(),
        cy,
        bounds.min_x(),
        cy
    )
}

impl Renderer for SvgRenderer {
    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn begin_path(&mut self) {
        self.data.clear();
        self.transform = Transform::identity();
    }

    fn move_to(&mut self, point: Vector2) {
        self.push_point('M', point);
    }

    fn line_to(&mut self, point: Vector2) {
        self.push_point('L', point);
    }

    fn oval(&mut self, bounds: Bounds) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push_str(&oval_data(bounds));
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.transform = self.transform.then(transform);
    }

    fn stroke(&mut self) {
        let Some(element) = self.current_element() else {
            return;
        };
        let element = element
            .set("fill", "none")
            .set("stroke", self.stroke_color.to_string())
            .set("stroke-opacity", self.stroke_color.alpha())
            .set("stroke-width", self.stroke_width)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round")
            .set("vector-effect", "non-scaling-stroke");
        self.elements.push(element);
    }

    fn fill(&mut self) {
        let Some(element) = self.current_element() else {
            return;
        };
        let element = element
            .set("fill", self.fill_color.to_string())
            .set("fill-opacity", self.fill_color.alpha())
            .set("stroke", "none");
        self.elements.push(element);
    }
}
