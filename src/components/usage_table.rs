use chrono::Local;
use dioxus::prelude::*;

use crate::shared::types::UsageRecord;
use crate::usage::sort::{SortColumn, SortDirective, SortState};
use crate::utils::format::{format_credits, format_timestamp};

/// Title shown on a sortable header: what the next click does.
fn next_action_hint(current: SortDirective) -> &'static str {
    match current.next() {
        SortDirective::Ascending => "Sort ascending",
        SortDirective::Descending => "Sort descending",
        SortDirective::None => "Clear sort",
    }
}

fn direction_marker(current: SortDirective) -> &'static str {
    match current {
        SortDirective::Ascending => " 🔼",
        SortDirective::Descending => " 🔽",
        SortDirective::None => "",
    }
}

const TH_CLASS: &str = "border border-slate-700 px-3 py-3 text-left font-semibold text-slate-200";
const TD_CLASS: &str = "border border-slate-800 px-3 py-2 whitespace-nowrap overflow-hidden text-ellipsis";

#[allow(non_snake_case)]
#[component]
pub fn UsageTable(
    records: Vec<UsageRecord>,
    sort: SortState,
    on_toggle: EventHandler<SortColumn>,
) -> Element {
    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 overflow-x-auto",
            table { class: "table-auto border-collapse w-full text-sm text-slate-300",
                thead { class: "bg-slate-900",
                    tr {
                        th { class: TH_CLASS, "Message ID" }
                        th { class: TH_CLASS, "Timestamp" }
                        SortableHeader {
                            label: "Report Name",
                            direction: sort.report,
                            onclick: move |_| on_toggle.call(SortColumn::ReportName),
                        }
                        SortableHeader {
                            label: "Credits Used",
                            direction: sort.credits,
                            onclick: move |_| on_toggle.call(SortColumn::Credits),
                        }
                    }
                }
                tbody {
                    {
                        records.iter().map(|record| {
                            let timestamp = format_timestamp(&record.timestamp, &Local);
                            let report_name = record.report_name.clone().unwrap_or_default();
                            let credits = format_credits(record.credits);
                            rsx! {
                                tr { key: "{record.id}", class: "hover:bg-slate-800/40",
                                    td { class: TD_CLASS, "{record.id}" }
                                    td { class: "{TD_CLASS} tabular-nums", "{timestamp}" }
                                    td { class: "{TD_CLASS} truncate max-w-xs", "{report_name}" }
                                    td { class: "{TD_CLASS} text-right tabular-nums", "{credits}" }
                                }
                            }
                        })
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn SortableHeader(label: String, direction: SortDirective, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        th {
            class: "{TH_CLASS} cursor-pointer select-none min-w-[150px]",
            title: next_action_hint(direction),
            onclick: move |evt| onclick.call(evt),
            "{label}"
            span { "{direction_marker(direction)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_hint_describes_next_click() {
        assert_eq!(next_action_hint(SortDirective::None), "Sort ascending");
        assert_eq!(next_action_hint(SortDirective::Ascending), "Sort descending");
        assert_eq!(next_action_hint(SortDirective::Descending), "Clear sort");
    }

    #[test]
    fn marker_only_for_active_direction() {
        assert_eq!(direction_marker(SortDirective::None), "");
        assert_eq!(direction_marker(SortDirective::Ascending), " 🔼");
        assert_eq!(direction_marker(SortDirective::Descending), " 🔽");
    }
}
