//! Display equations for the selected conic.

use crate::conic::{ConicType, ShapeParams};

/// Canonical equation of the conic with the current parameter values substituted.
///
/// Circles use plain text; the other families use the LaTeX `\frac` form the lesson
/// pages render.
pub fn equation_string(kind: ConicType, params: &ShapeParams) -> String {
    let ShapeParams { a, b, h, k, .. } = *params;
    let (h, k) = (num(h), num(k));
    match kind {
        ConicType::Circle => format!("(x - {h})² + (y - {k})² = {}", num(a * a)),
        ConicType::Ellipse => format!(
            "\\frac{{(x - {h})^2}}{{{}}} + \\frac{{(y - {k})^2}}{{{}}} = 1",
            num(a * a),
            num(b * b)
        ),
        ConicType::Parabola => format!(
            "(y - {k}) = \\frac{{1}}{{{}}}(x - {h})^2",
            num(4.0 * a)
        ),
        ConicType::Hyperbola => format!(
            "\\frac{{(x - {h})^2}}{{{}}} - \\frac{{(y - {k})^2}}{{{}}} = 1",
            num(a * a),
            num(b * b)
        ),
    }
}

/// Shortest round-trip decimal, with negative zero shown as `0`.
fn num(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    v.to_string()
}
