//! Fitting a scene into the output canvas.

use log::debug;

use plotline_core::geometry::{Bounds, Transform};

use crate::config::CanvasConfig;

/// Returns the transform that centers `bounds` on the canvas and scales it
/// uniformly to fill the area inside the padding.
///
/// Degenerate extents keep the scale of their non-degenerate axis, and a
/// single point is only translated. Without bounds the identity is returned.
pub fn fit_transform(bounds: Option<Bounds>, canvas: &CanvasConfig) -> Transform {
    let Some(bounds) = bounds else {
        return Transform::identity();
    };

    let available_width = canvas.width() - 2.0 * canvas.padding();
    let available_height = canvas.height() - 2.0 * canvas.padding();

    let scale = match (bounds.width() > 0.0, bounds.height() > 0.0) {
        (true, true) => (available_width / bounds.width()).min(available_height / bounds.height()),
        (true, false) => available_width / bounds.width(),
        (false, true) => available_height / bounds.height(),
        (false, false) => 1.0,
    };
    let y_scale = if canvas.flip_y() { -scale } else { scale };
    let center = bounds.center();

    debug!(scale, flip_y = canvas.flip_y(); "Fitting scene to canvas");

    Transform::translation(-center.x(), -center.y())
        .then(&Transform::scale(scale, y_scale))
        .then(&Transform::translation(
            canvas.width() / 2.0,
            canvas.height() / 2.0,
        ))
}
