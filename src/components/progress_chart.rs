//! Progress Chart Component
//!
//! Weekly completion chart: one line per habit across Mon..Sun, drawn as
//! plain SVG from the geometry helpers in `chart`.

use leptos::prelude::*;

use crate::chart;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Card plotting the weekly progress series
#[component]
pub fn ProgressChart() -> impl IntoView {
    let store = use_dashboard_store();

    let view_box = format!("0 0 {} {}", chart::VIEW_W, chart::VIEW_H);
    let x_left = chart::PAD;
    let x_right = chart::VIEW_W - chart::PAD;
    let y_done = chart::point_y(true);
    let y_not_done = chart::point_y(false);
    let tick_x = x_left - 10.0;
    let tick_y_done = y_done + 4.0;
    let tick_y_not_done = y_not_done + 4.0;
    let day_label_y = chart::VIEW_H - chart::PAD + 18.0;

    let day_labels = move || {
        let days = store.progress().get();
        let n = days.len();
        days.iter()
            .enumerate()
            .map(|(i, day)| {
                view! {
                    <text
                        class="chart-axis-label"
                        x=format!("{:.1}", chart::point_x(i, n))
                        y=format!("{:.1}", day_label_y)
                        text-anchor="middle"
                    >
                        {day.day.clone()}
                    </text>
                }
            })
            .collect_view()
    };

    let series_lines = move || {
        let days = store.progress().get();
        chart::series_names(&days)
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let series = chart::series_for(&name, &days);
                view! {
                    <polyline
                        points=chart::polyline_points(&series)
                        fill="none"
                        stroke=chart::series_color(idx)
                        stroke-width="2"
                        stroke-linejoin="round"
                        stroke-linecap="round"
                    />
                }
            })
            .collect_view()
    };

    let legend = move || {
        let days = store.progress().get();
        chart::series_names(&days)
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                view! {
                    <span class="legend-item">
                        <span
                            class="legend-swatch"
                            style=format!("background: {}", chart::series_color(idx))
                        ></span>
                        {name}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">"Weekly Progress"</h2>
            </div>
            <div class="card-body">
                <svg
                    class="chart-svg"
                    viewBox=view_box
                    role="img"
                    aria-label="Weekly habit completion chart"
                >
                    <line class="chart-grid-line" x1=x_left y1=y_done x2=x_right y2=y_done />
                    <line class="chart-axis-line" x1=x_left y1=y_not_done x2=x_right y2=y_not_done />
                    <line class="chart-axis-line" x1=x_left y1=y_done x2=x_left y2=y_not_done />
                    <text class="chart-axis-label" x=tick_x y=tick_y_done text-anchor="end">"1"</text>
                    <text class="chart-axis-label" x=tick_x y=tick_y_not_done text-anchor="end">"0"</text>
                    {day_labels}
                    {series_lines}
                </svg>
                <div class="chart-legend">{legend}</div>
            </div>
        </div>
    }
}
