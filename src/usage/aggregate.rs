//! Per-day credit totals for the usage chart.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone};
use dioxus::logger::tracing::warn;

use crate::shared::types::{ChartPoint, UsageRecord};
use crate::utils::format::{format_day, round_credits};
use crate::utils::time::local_day;

/// Group `records` by calendar day in `tz` and sum their credits.
///
/// One point per distinct day, ordered by the day itself rather than by the
/// display string. Records whose timestamp cannot be parsed are left out.
pub fn aggregate_by_day<Tz: TimeZone>(records: &[UsageRecord], tz: &Tz) -> Vec<ChartPoint> {
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        let Some(day) = local_day(&record.timestamp, tz) else {
            warn!(
                "[aggregate] record {} has unparseable timestamp {:?}; not charted",
                record.id, record.timestamp
            );
            continue;
        };
        *by_day.entry(day).or_insert(0.0) += record.credits;
    }

    by_day
        .into_iter()
        .map(|(day, credits)| ChartPoint {
            date: format_day(day),
            credits: round_credits(credits),
        })
        .collect()
}
