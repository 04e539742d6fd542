//! Donut Chart
//!
//! Gained vs burned totals drawn with Chart.js. The host page loads Chart.js;
//! one chart instance is created per mount, fed new data on every store change
//! and destroyed on cleanup.

use leptos::html;
use leptos::prelude::*;
use serde::Serialize;
use web_sys::HtmlCanvasElement;

use crate::config::TrackerConfig;
use crate::context::use_tracker;
use crate::models::{RecordKind, Totals};

pub const GAINED_COLOR: &str = "#10B981";
pub const BURNED_COLOR: &str = "#EF4444";
pub const CUTOUT: &str = "50%";

mod bindings {
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    #[wasm_bindgen]
    extern "C" {
        pub type Chart;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

        #[wasm_bindgen(method, setter)]
        pub fn set_data(this: &Chart, data: &JsValue);

        #[wasm_bindgen(method)]
        pub fn update(this: &Chart);

        #[wasm_bindgen(method)]
        pub fn destroy(this: &Chart);
    }
}

use bindings::Chart;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
    pub background_color: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub cutout: &'static str,
}

/// Argument to `new Chart(canvas, config)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoughnutConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

pub fn chart_data(totals: &Totals) -> ChartData {
    ChartData {
        labels: vec![RecordKind::Gained.label(), RecordKind::Burned.label()],
        datasets: vec![Dataset {
            data: vec![totals.gained_total, totals.burned_total],
            background_color: vec![GAINED_COLOR, BURNED_COLOR],
        }],
    }
}

pub fn doughnut_config(totals: &Totals) -> DoughnutConfig {
    DoughnutConfig {
        chart_type: "doughnut",
        data: chart_data(totals),
        options: ChartOptions { cutout: CUTOUT },
    }
}

/// Create the chart on first use, afterwards swap its data and redraw
fn draw(canvas: &HtmlCanvasElement, slot: &mut Option<Chart>, totals: &Totals) {
    if let Some(existing) = slot.as_ref() {
        match serde_wasm_bindgen::to_value(&chart_data(totals)) {
            Ok(data) => {
                existing.set_data(&data);
                existing.update();
            }
            Err(e) => log::error!(target: "CHART", "Cannot encode chart data: {}", e),
        }
        return;
    }

    let config = match serde_wasm_bindgen::to_value(&doughnut_config(totals)) {
        Ok(config) => config,
        Err(e) => {
            log::error!(target: "CHART", "Cannot encode chart config: {}", e);
            return;
        }
    };
    match Chart::new(canvas, &config) {
        Ok(created) => *slot = Some(created),
        Err(e) => log::error!(target: "CHART", "Chart.js unavailable: {:?}", e),
    }
}

#[component]
pub fn DonutChart() -> impl IntoView {
    let ctx = use_tracker();
    let config = expect_context::<TrackerConfig>();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let chart = StoredValue::new_local(None::<Chart>);

    Effect::new(move |_| {
        let totals = ctx.records.with(|store| store.totals());
        if let Some(canvas) = canvas_ref.get() {
            chart.update_value(|slot| draw(&canvas, slot, &totals));
        }
    });

    on_cleanup(move || {
        chart.update_value(|slot| {
            if let Some(existing) = slot.take() {
                existing.destroy();
            }
        });
    });

    view! {
        <div class="chart-container">
            <canvas id=config.canvas_id node_ref=canvas_ref></canvas>
        </div>
    }
}
