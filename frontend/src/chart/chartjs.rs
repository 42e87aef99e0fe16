//! Declarative chart boundary: builds the configuration object for the
//! Chart.js runtime the host page loads, and the thin binding that hands it
//! over. The runtime itself is an external collaborator; only the config
//! shape is ours.

use std::cell::Cell;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::model::ChartSegment;

pub const CHART_TITLE: &str = "Budget Distribution (Chart.js)";
pub const BORDER_WIDTH: u32 = 2;
pub const LEGEND_POSITION: &str = "top";

/// Constructor argument for the Chart.js `Chart` global, field for field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub data: Vec<f64>,
    #[serde(rename = "backgroundColor")]
    pub background_color: Vec<&'static str>,
    #[serde(rename = "borderWidth")]
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: PluginOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub title: TitleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: &'static str,
}

/// Build the declarative chart configuration.
///
/// Labels, values and colors are derived from the same segment in a single
/// pass, so index `i` refers to one category across all three arrays. That
/// alignment is the correctness contract with the chart runtime.
pub fn pie_chart_config(segments: &[ChartSegment]) -> PieChartConfig {
    let mut labels = Vec::with_capacity(segments.len());
    let mut data = Vec::with_capacity(segments.len());
    let mut background_color = Vec::with_capacity(segments.len());
    for segment in segments {
        labels.push(segment.title.clone());
        data.push(segment.value);
        background_color.push(segment.color);
    }

    PieChartConfig {
        chart_type: "pie",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                data,
                background_color,
                border_width: BORDER_WIDTH,
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: PluginOptions {
                legend: LegendOptions {
                    position: LEGEND_POSITION,
                },
                title: TitleOptions {
                    display: true,
                    text: CHART_TITLE,
                },
            },
        },
    }
}

#[wasm_bindgen]
extern "C" {
    /// Handle to one mounted Chart.js chart.
    pub type Chart;

    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Chart;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);
}

thread_local! {
    static RUNTIME_PRESENT: Cell<Option<bool>> = const { Cell::new(None) };
}

/// Check once per process that the host page loaded the Chart.js bundle.
///
/// The bundle registers its own chart components on load, so presence is the
/// whole initialization contract. Repeat calls reuse the first answer, which
/// keeps this independent of script load order.
pub fn ensure_registered() -> bool {
    RUNTIME_PRESENT.with(|cell| {
        if let Some(present) = cell.get() {
            return present;
        }
        let present = web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("Chart")).ok())
            .map(|value| value.is_function())
            .unwrap_or(false);
        cell.set(Some(present));
        present
    })
}

/// Mount a new chart on `canvas`, destroying `previous` first so repeated
/// data loads never stack charts. Returns the new render handle.
pub fn replace_chart(
    canvas: &HtmlCanvasElement,
    config: &PieChartConfig,
    previous: Option<Chart>,
) -> Result<Chart, JsValue> {
    if let Some(old) = previous {
        old.destroy();
    }
    let json = serde_json::to_string(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let js_config = js_sys::JSON::parse(&json)?;
    Ok(Chart::new(canvas, &js_config))
}
