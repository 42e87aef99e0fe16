use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};
use yew::prelude::*;

use crate::chart::layout::{self, ArcSpan};
use crate::chart::model::ChartSegment;
use crate::services::Logger;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Properties, PartialEq, Debug)]
pub struct DonutChartProps {
    pub segments: Vec<ChartSegment>,
}

/// Hand-built donut chart: SVG arcs and labels mounted imperatively into the
/// container div this component owns. No charting library is involved; all
/// geometry comes from `chart::layout`.
pub struct DonutChart {
    container_ref: NodeRef,
}

impl Component for DonutChart {
    type Message = ();
    type Properties = DonutChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            container_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Redraw only when the data actually changed, not on every parent
        // re-render.
        if ctx.props().segments != old_props.segments {
            self.draw(&ctx.props().segments);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // The container exists once we have rendered; that is the signal to
        // draw. No timers involved.
        if first_render {
            self.draw(&ctx.props().segments);
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div
                ref={self.container_ref.clone()}
                class="vector-donut"
                style="width: 400px; height: 400px; margin: 0 auto;"
            ></div>
        }
    }
}

impl DonutChart {
    fn draw(&self, segments: &[ChartSegment]) {
        let container = match self.container_ref.cast::<HtmlElement>() {
            Some(container) => container,
            None => return,
        };
        draw_into(&container, segments);
    }
}

/// Clear the container and rebuild the donut from scratch. Calling this any
/// number of times with the same data leaves the same tree behind, so a data
/// refresh can never stack charts.
fn draw_into(container: &HtmlElement, segments: &[ChartSegment]) {
    clear_children(container);

    let values: Vec<f64> = segments.iter().map(|s| s.value).collect();
    let spans = layout::pie_layout(&values);
    if spans.is_empty() {
        // Empty or zero-total data: a cleared container is the whole render.
        return;
    }

    let document = match container.owner_document() {
        Some(document) => document,
        None => return,
    };

    match build_svg(&document, segments, &spans) {
        Ok(svg) => {
            if container.append_child(&svg).is_err() {
                Logger::error_with_component("DonutChart", "failed to mount svg into container");
            }
        }
        Err(_) => {
            Logger::error_with_component("DonutChart", "failed to build svg nodes");
        }
    }
}

fn clear_children(container: &HtmlElement) {
    while let Some(child) = container.first_child() {
        let _ = container.remove_child(&child);
    }
}

fn build_svg(
    document: &Document,
    segments: &[ChartSegment],
    spans: &[ArcSpan],
) -> Result<Element, JsValue> {
    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    svg.set_attribute("width", &layout::CHART_WIDTH.to_string())?;
    svg.set_attribute("height", &layout::CHART_HEIGHT.to_string())?;
    svg.set_attribute("style", "display: block; margin: 0 auto;")?;

    let group = document.create_element_ns(Some(SVG_NS), "g")?;
    group.set_attribute(
        "transform",
        &format!(
            "translate({}, {})",
            layout::CHART_WIDTH / 2.0,
            layout::CHART_HEIGHT / 2.0
        ),
    )?;

    let inner = layout::inner_radius();
    let outer = layout::outer_radius();

    for (segment, span) in segments.iter().zip(spans) {
        // A zero-sweep segment gets no arc, but its centroid is still well
        // defined, so the label renders like any other.
        if span.sweep() > 0.0 {
            let path = document.create_element_ns(Some(SVG_NS), "path")?;
            path.set_attribute("d", &layout::annulus_path(*span, inner, outer))?;
            path.set_attribute("fill", segment.color)?;
            path.set_attribute("stroke", "white")?;
            path.set_attribute("stroke-width", "2")?;
            group.append_child(&path)?;
        }

        let (x, y) = layout::label_anchor(*span, inner, outer);
        let label = document.create_element_ns(Some(SVG_NS), "text")?;
        label.set_attribute("transform", &format!("translate({x:.3}, {y:.3})"))?;
        label.set_attribute("dy", "0.35em")?;
        label.set_attribute("text-anchor", "middle")?;
        label.set_attribute("style", "font-size: 11px; font-weight: bold; fill: #333;")?;
        label.set_text_content(Some(&segment.title));
        group.append_child(&label)?;
    }

    svg.append_child(&group)?;
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::model::build_segments;
    use shared::BudgetCategory;

    fn category(title: &str, budget: f64) -> BudgetCategory {
        BudgetCategory {
            title: title.to_string(),
            budget,
        }
    }

    #[test]
    fn props_compare_by_segment_data() {
        let a = DonutChartProps {
            segments: build_segments(&[category("Rent", 1200.0)]),
        };
        let b = DonutChartProps {
            segments: build_segments(&[category("Rent", 1200.0)]),
        };
        let c = DonutChartProps {
            segments: build_segments(&[category("Rent", 900.0)]),
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    // Drawing with no mounted container must be a no-op, not a panic.
    #[test]
    fn draw_without_container_is_a_no_op() {
        let chart = DonutChart {
            container_ref: NodeRef::default(),
        };
        chart.draw(&build_segments(&[category("Rent", 1200.0)]));
        chart.draw(&[]);
    }
}
