use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::chart::chartjs::{self, Chart};
use crate::chart::model::ChartSegment;
use crate::services::Logger;

#[derive(Properties, PartialEq, Debug)]
pub struct PieCardProps {
    pub segments: Vec<ChartSegment>,
}

/// Card hosting the declarative Chart.js pie.
///
/// The component owns the live render handle; a redraw destroys the previous
/// chart and mounts a fresh one, so the canvas is always replaced wholesale
/// rather than partially mutated.
pub struct PieCard {
    canvas_ref: NodeRef,
    chart: Option<Chart>,
    runtime_present: bool,
}

impl Component for PieCard {
    type Message = ();
    type Properties = PieCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            chart: None,
            runtime_present: chartjs::ensure_registered(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().segments != old_props.segments {
            self.mount_chart(&ctx.props().segments);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // The canvas is attached once rendered; draw then, not on a timer.
        if first_render {
            self.mount_chart(&ctx.props().segments);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if !self.runtime_present {
            return html! {
                <p class="chart-unavailable">{"Chart.js runtime is not loaded."}</p>
            };
        }

        html! {
            <div style="width: 400px; height: 400px; margin: 0 auto;">
                <canvas ref={self.canvas_ref.clone()} width="400" height="400"></canvas>
            </div>
        }
    }
}

impl PieCard {
    fn mount_chart(&mut self, segments: &[ChartSegment]) {
        if !self.runtime_present {
            return;
        }
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        let config = chartjs::pie_chart_config(segments);
        match chartjs::replace_chart(&canvas, &config, self.chart.take()) {
            Ok(chart) => self.chart = Some(chart),
            Err(_) => {
                Logger::error_with_component("PieCard", "failed to mount Chart.js chart");
            }
        }
    }
}
