/// Segment colors shared by both chart renderers.
///
/// Order matters: segment `i` gets `palette[i % palette.len()]`, so category
/// lists longer than the palette cycle back to the first color. Callers that
/// want a different cycle length pass their own slice.
pub const SEGMENT_PALETTE: &[&str] = &[
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

/// Used when a caller hands in an empty palette.
const FALLBACK_COLOR: &str = "#CCCCCC";

/// Color for the segment at `index`, cycling through `palette`.
pub fn color_at(palette: &[&'static str], index: usize) -> &'static str {
    if palette.is_empty() {
        return FALLBACK_COLOR;
    }
    palette[index % palette.len()]
}
