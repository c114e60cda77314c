use chrono::Local;
use dioxus::prelude::*;

use crate::api::get_usage;
use crate::app::Route;
use crate::components::usage_summary_card::period_label;
use crate::components::{UsageChartView, UsageSummaryCard, UsageTable};
use crate::usage::query::SortQuery;
use crate::usage::sort::{sort_usage, SortColumn};
use crate::usage::state::DashboardState;

/// Routed page. Sort state comes only from `query`; clicking a header
/// navigates to the toggled query instead of mutating local state.
#[allow(non_snake_case)]
#[component]
pub fn UsageDashboard(query: SortQuery) -> Element {
    // One fetch per mount; query changes re-render without refetching
    let usage = use_resource(|| async move { get_usage().await });
    let state = use_memo(move || DashboardState::from_fetch(usage.read().as_ref(), &Local));

    let on_toggle = {
        let current = query.clone();
        move |column: SortColumn| {
            let next = current.toggled(column);
            navigator().push(Route::UsageDashboard { query: next });
        }
    };

    rsx! {
        div { class: "w-full max-w-5xl mx-auto space-y-6",
            {
                match &*state.read() {
                    DashboardState::Loading => rsx! {
                        div { class: "w-full max-w-xl mx-auto rounded-2xl border border-slate-800 bg-slate-900/60 p-8 animate-pulse space-y-3",
                            div { class: "h-9 w-28 bg-slate-800 rounded" }
                            div { class: "h-5 w-48 bg-slate-800 rounded" }
                            div { class: "h-3 w-40 bg-slate-800 rounded" }
                            p { class: "sr-only", "Loading..." }
                        }
                    },
                    DashboardState::Error(message) => rsx! {
                        div { class: "w-full max-w-xl mx-auto rounded-2xl border border-slate-800 bg-slate-900/60 p-8 text-center",
                            p { class: "text-lg text-red-400 font-medium", "{message}" }
                        }
                    },
                    DashboardState::Ready(view) => {
                        let rows = sort_usage(&view.usage, query.sort);
                        rsx! {
                            div { class: "w-full max-w-xl mx-auto",
                                UsageSummaryCard {
                                    total_credits: view.total_credits,
                                    records: view.usage.len(),
                                    period: period_label(&view.chart),
                                }
                            }
                            UsageChartView { points: view.chart.clone() }
                            UsageTable { records: rows, sort: query.sort, on_toggle }
                        }
                    }
                }
            }
        }
    }
}
