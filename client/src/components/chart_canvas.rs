//! Canvas host for one Chart.js chart.
//!
//! The chart is rebuilt whenever `data` changes: the previous instance is
//! destroyed first so Chart.js releases the canvas.

#[cfg(test)]
#[path = "chart_canvas_test.rs"]
mod chart_canvas_test;

use leptos::prelude::*;

use crate::util::chart::{ChartData, ChartKind};

#[component]
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn ChartCanvas(kind: ChartKind, #[prop(into)] data: Signal<ChartData>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::{chart::chart_config, chartjs};

        let chart = StoredValue::new_local(None::<chartjs::Chart>);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let config = chart_config(kind, &data.get());
            chart.update_value(|slot| {
                if let Some(previous) = slot.take() {
                    previous.destroy();
                }
                match chartjs::create(&canvas, &config) {
                    Ok(created) => *slot = Some(created),
                    Err(e) => leptos::logging::warn!("chart init failed: {e:?}"),
                }
            });
        });
        on_cleanup(move || {
            chart.update_value(|slot| {
                if let Some(previous) = slot.take() {
                    previous.destroy();
                }
            });
        });
    }
    view! {
        <div class="chart">
            <canvas class="chart__canvas" aria-label=kind.as_str() node_ref=canvas_ref></canvas>
        </div>
    }
}
