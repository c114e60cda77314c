use dioxus::prelude::*;

use crate::shared::types::ChartPoint;
use crate::utils::format::format_credits;

/// Covered days, e.g. `01-04-2024 to 29-04-2024`; empty without data.
pub fn period_label(chart: &[ChartPoint]) -> String {
    match (chart.first(), chart.last()) {
        (Some(first), Some(last)) if first.date != last.date => {
            format!("{} to {}", first.date, last.date)
        }
        (Some(only), _) => only.date.clone(),
        _ => String::new(),
    }
}

#[allow(non_snake_case)]
#[component]
pub fn UsageSummaryCard(total_credits: f64, records: usize, period: String) -> Element {
    rsx! {
        div { class: "w-full rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-8 space-y-4",
            h1 { class: "text-2xl font-semibold tracking-tight text-slate-200", "Usage Dashboard" }
            div { class: "flex flex-col items-center gap-2",
                div { class: "text-5xl font-bold text-indigo-400 tabular-nums", "{format_credits(total_credits)}" }
                div { class: "text-lg text-slate-300", "credits used" }
                div { class: "text-xs text-slate-400",
                    "{records} messages"
                    if !period.is_empty() { " · {period}" }
                }
            }
        }
    }
}
