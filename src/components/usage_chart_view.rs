use dioxus::prelude::*;

use crate::shared::types::ChartPoint;
use crate::utils::format::format_credits;

const Y_TICKS: usize = 4;

/// Evenly spaced gridline values up to `peak`; none for an empty chart.
fn y_ticks(peak: f64, count: usize) -> Vec<f64> {
    if peak <= 0.0 || count == 0 {
        return Vec::new();
    }
    (1..=count)
        .map(|k| peak * k as f64 / count as f64)
        .collect()
}

#[allow(non_snake_case)]
#[component]
pub fn UsageChartView(points: Vec<ChartPoint>) -> Element {
    // Hovered bar index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);
    // Visual params
    let height = 180.0f32;
    let padding = 20.0f32;
    let bar_w = 12.0f32;
    let bar_gap = 4.0f32;
    let n = points.len().max(1) as f32;
    let axis_w = 36.0f32; // y tick labels
    let left = padding + axis_w;
    let width = (n * (bar_w + bar_gap) + left + padding).ceil().max(240.0);
    let peak_credits = points.iter().map(|p| p.credits).fold(0.0f64, f64::max);
    let max_credits = peak_credits as f32;
    let peak = format_credits(peak_credits);
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);
    let bar_height = move |credits: f64| {
        if max_credits <= 0.0 {
            0.0
        } else {
            (credits as f32) / max_credits * height
        }
    };

    // Month label iterator will track seen months internally
    use std::collections::HashSet;

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-3",
            div { class: "flex items-end justify-between",
                h2 { class: "text-lg font-medium text-slate-200", "Credits per day" }
                if max_credits > 0.0 { div { class: "text-xs text-slate-400", "Peak: {peak}" } }
            }
            if points.is_empty() {
                p { class: "text-sm text-slate-400", "No usage in this period." }
            }
            div { class: "w-full overflow-x-auto",
                svg { class: "block min-w-full", view_box: "{view_box}", width: "100%", height: "{(height + padding*2.0).to_string()}",
                    line { x1: "{left}", y1: "{padding}", x2: "{left}", y2: "{padding + height}", stroke: "#1f2937", stroke_width: "1" }
                    line { x1: "{left}", y1: "{padding + height}", x2: "{width - padding}", y2: "{padding + height}", stroke: "#1f2937", stroke_width: "1" }
                    {
                        y_ticks(peak_credits, Y_TICKS).into_iter().enumerate().map(|(k, tick)| {
                            let y = padding + height - bar_height(tick);
                            let label = format!("{tick:.1}");
                            rsx!{ g { key: "tick-{k}",
                                line { x1: "{left}", y1: "{y}", x2: "{width - padding}", y2: "{y}", stroke: "#1f2937", stroke_width: "1", stroke_dasharray: "3 3" }
                                text { x: "{left - 4.0}", y: "{y + 3.0}", text_anchor: "end", class: "text-slate-500 fill-current text-[10px]", "{label}" }
                            }}
                        })
                    }
                    {
                        points.iter().enumerate().map(|(i, p)| {
                            let x = left + (i as f32) * (bar_w + bar_gap);
                            let h = bar_height(p.credits);
                            let y = padding + (height - h);
                            rsx!{ rect {
                                key: "{p.date}", class: "text-indigo-400/80", x: "{x}", y: "{y}", width: "{bar_w}", height: "{h}", fill: "currentColor", rx: "2",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }}
                        })
                    }
                    {
                        match *hovered.read() {
                            Some(i) if i < points.len() => {
                                let p = &points[i];
                                let x = left + (i as f32) * (bar_w + bar_gap) + bar_w / 2.0; // center of bar
                                let y = padding + (height - bar_height(p.credits));
                                let date_label = p.date.clone();
                                let value_label = format!("{} credits", format_credits(p.credits));
                                let cw = 7.0f32; // approx char width at 11px
                                let content_w = (date_label.len().max(value_label.len()) as f32) * cw + 12.0; // padding
                                let tip_w = content_w.max(12.0).min(width - padding * 2.0);
                                let tip_h = 36.0f32; // two lines
                                let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                                let tip_y = (y - 10.0 - tip_h).max(6.0);
                                rsx!{ g { key: "tooltip",
                                    line { x1: "{x}", y1: "{y}", x2: "{x}", y2: "{tip_y + tip_h}", stroke: "#818cf8", stroke_width: "1" }
                                    rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 16.0}", class: "fill-current text-[11px] text-slate-300", "{date_label}" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 30.0}", class: "fill-current text-[11px] text-slate-200", "{value_label}" }
                                }}
                            }
                            _ => rsx!{ Fragment {} }
                        }
                    }
                    {
                        // dd-mm-yyyy: label each month once, at its first bar
                        points.iter().enumerate().scan(HashSet::<String>::new(), |printed, (i, p)| {
                            if let Some(m) = p.date.get(3..) {
                                if printed.insert(m.to_string()) {
                                    let x = left + (i as f32) * (bar_w + bar_gap);
                                    let node = rsx!{ text { x: "{x}", y: "{height + padding + 14.0}", class: "text-slate-400 fill-current text-[10px]", "{m}" } };
                                    return Some(Some(node));
                                }
                            }
                            Some(None)
                        }).flatten()
                    }
                }
            }
        }
    }
}
