//! Donut geometry: angular layout, annular arc paths and label anchors.
//!
//! Everything here is pure so it can be unit tested off the browser. Angle 0
//! points straight up and angles grow clockwise, which matches screen
//! coordinates with y pointing down.

use std::f64::consts::{PI, TAU};

/// Fixed drawing area for the vector donut, matching the host container.
pub const CHART_WIDTH: f64 = 400.0;
pub const CHART_HEIGHT: f64 = 400.0;
pub const CHART_MARGIN: f64 = 40.0;

/// How far outside the ring labels sit, relative to the arc centroid.
pub const LABEL_OFFSET: f64 = 1.4;

/// Outer radius of the donut given the fixed viewport.
pub fn outer_radius() -> f64 {
    CHART_WIDTH.min(CHART_HEIGHT) / 2.0 - CHART_MARGIN
}

/// Inner radius: half the outer radius leaves the donut hole.
pub fn inner_radius() -> f64 {
    outer_radius() * 0.5
}

/// Angular span of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcSpan {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Lay out one span per value, each proportional to its share of the total,
/// in input order. Generic pie layouts sort by value; this one deliberately
/// does not, so the chart matches the order the service returned.
///
/// Values are clamped at zero first. A zero (or unrepresentable) total yields
/// an empty layout rather than dividing by zero.
pub fn pie_layout(values: &[f64]) -> Vec<ArcSpan> {
    let clamped: Vec<f64> = values.iter().map(|v| clamp_value(*v)).collect();
    let total: f64 = clamped.iter().sum();
    if !(total > 0.0) || !total.is_finite() {
        return Vec::new();
    }

    let mut spans = Vec::with_capacity(clamped.len());
    let mut angle = 0.0;
    for value in &clamped {
        let sweep = value / total * TAU;
        spans.push(ArcSpan {
            start_angle: angle,
            end_angle: angle + sweep,
        });
        angle += sweep;
    }
    spans
}

fn clamp_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn point_at(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// SVG path data for the annular sector between `inner` and `outer` radii.
///
/// A span covering the full circle is drawn as two rings instead, since a
/// single 360-degree arc command collapses to nothing.
pub fn annulus_path(span: ArcSpan, inner: f64, outer: f64) -> String {
    let sweep = span.sweep();
    if sweep >= TAU - 1e-9 {
        return full_annulus_path(inner, outer);
    }

    let large_arc = u8::from(sweep > PI);
    let (x0, y0) = point_at(outer, span.start_angle);
    let (x1, y1) = point_at(outer, span.end_angle);
    let (x2, y2) = point_at(inner, span.end_angle);
    let (x3, y3) = point_at(inner, span.start_angle);

    format!(
        "M{x0:.3},{y0:.3}\
         A{outer:.3},{outer:.3} 0 {large_arc} 1 {x1:.3},{y1:.3}\
         L{x2:.3},{y2:.3}\
         A{inner:.3},{inner:.3} 0 {large_arc} 0 {x3:.3},{y3:.3}\
         Z"
    )
}

/// Outer ring clockwise, inner ring counter-clockwise: with the default
/// nonzero fill rule the hole stays open.
fn full_annulus_path(inner: f64, outer: f64) -> String {
    format!(
        "M0,{top_o:.3}\
         A{o:.3},{o:.3} 0 1 1 0,{bot_o:.3}\
         A{o:.3},{o:.3} 0 1 1 0,{top_o:.3}\
         Z\
         M0,{top_i:.3}\
         A{i:.3},{i:.3} 0 1 0 0,{bot_i:.3}\
         A{i:.3},{i:.3} 0 1 0 0,{top_i:.3}\
         Z",
        top_o = -outer,
        bot_o = outer,
        o = outer,
        top_i = -inner,
        bot_i = inner,
        i = inner,
    )
}

/// Centroid of an annular arc: the mid-angle point at mid-radius.
pub fn centroid(span: ArcSpan, inner: f64, outer: f64) -> (f64, f64) {
    point_at((inner + outer) / 2.0, span.mid_angle())
}

/// Label anchor: the centroid pushed outward so the text clears the ring.
pub fn label_anchor(span: ArcSpan, inner: f64, outer: f64) -> (f64, f64) {
    let (x, y) = centroid(span, inner, outer);
    (x * LABEL_OFFSET, y * LABEL_OFFSET)
}
