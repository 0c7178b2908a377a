use dioxus::document::eval;
use lesson_core::ChartSeries;
use lesson_core::chart::{FILL_COLOR, LINE_COLOR};
use serde::Deserialize;
use serde_json::{Value, json};
use services::{ChartError, ChartHandle, ChartSurface};
use tracing::warn;

use super::wait_for_global_js;

pub const CHART_CANVAS_ID: &str = "demoChart";

/// Runs after `waitForGlobal` is defined.
const CHART_PROBE_SCRIPT: &str = r#"
    const library = await waitForGlobal("Chart");
    const canvas = document.getElementById("demoChart");
    return { canvas: !!canvas, library: typeof library === "function" };
"#;

fn chart_probe_script() -> String {
    format!("{}\n{CHART_PROBE_SCRIPT}", wait_for_global_js())
}

const CHART_DESTROY_SCRIPT: &str = r#"
    if (window.__lessonChart) {
        window.__lessonChart.destroy();
        window.__lessonChart = null;
    }
"#;

#[derive(Clone, Copy, Debug, Default, Deserialize)]
struct ChartProbe {
    canvas: bool,
    library: bool,
}

/// Chart.js configuration for a lesson series.
#[must_use]
pub fn chart_config(series: &ChartSeries) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": series.label,
                "data": series.values,
                "borderColor": LINE_COLOR,
                "backgroundColor": FILL_COLOR,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
        },
    })
}

fn chart_create_script(series: &ChartSeries) -> String {
    format!(
        r#"
    const canvas = document.getElementById("{CHART_CANVAS_ID}");
    if (!canvas || typeof window.Chart !== "function") {{ return; }}
    window.__lessonChart = new Chart(canvas.getContext("2d"), {config});
"#,
        config = chart_config(series)
    )
}

/// The `demoChart` canvas, as seen when the render fires.
pub struct ChartJsSurface {
    probe: ChartProbe,
}

impl ChartJsSurface {
    /// Check that the canvas exists and Chart.js is loaded, giving the
    /// library's `<script>` tag time to finish downloading.
    pub async fn probe() -> Self {
        let probe = match eval(&chart_probe_script()).join::<ChartProbe>().await {
            Ok(probe) => probe,
            Err(err) => {
                warn!(error = ?err, "chart probe failed");
                ChartProbe::default()
            }
        };
        Self { probe }
    }
}

impl ChartSurface for ChartJsSurface {
    fn draw(&self, series: &ChartSeries) -> Result<Box<dyn ChartHandle>, ChartError> {
        if !self.probe.canvas {
            return Err(ChartError::CanvasMissing);
        }
        if !self.probe.library {
            return Err(ChartError::Unavailable);
        }
        let _ = eval(&chart_create_script(series));
        Ok(Box::new(ChartJsHandle))
    }
}

struct ChartJsHandle;

impl ChartHandle for ChartJsHandle {
    fn dispose(&mut self) {
        let _ = eval(CHART_DESTROY_SCRIPT);
    }
}
