use std::fmt;

use chrono::TimeZone;
use dioxus::logger::tracing::{error, info};

use crate::shared::types::{ChartPoint, UsageRecord, UsageResponse};
use crate::usage::aggregate::aggregate_by_day;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch usage data";

/// Data held for one page load once the fetch succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageView {
    pub usage: Vec<UsageRecord>, // fetch order
    pub total_credits: f64,
    pub chart: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(UsageView),
    Error(String),
}

impl DashboardState {
    /// `None` while the fetch is in flight. Both outcomes are terminal.
    pub fn from_fetch<E, Tz>(fetch: Option<&Result<UsageResponse, E>>, tz: &Tz) -> Self
    where
        E: fmt::Display,
        Tz: TimeZone,
    {
        match fetch {
            None => DashboardState::Loading,
            Some(Ok(resp)) => {
                let chart = aggregate_by_day(&resp.usage, tz);
                info!(
                    "[usage_dashboard] loaded {} records across {} days",
                    resp.usage.len(),
                    chart.len()
                );
                DashboardState::Ready(UsageView {
                    usage: resp.usage.clone(),
                    total_credits: resp.total_credits,
                    chart,
                })
            }
            Some(Err(e)) => {
                error!("[usage_dashboard] fetch failed: {e}");
                DashboardState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn response() -> UsageResponse {
        UsageResponse {
            usage: vec![
                UsageRecord {
                    id: 1000,
                    timestamp: "2024-04-29T02:08:29.375Z".into(),
                    report_name: None,
                    credits: 1.6,
                },
                UsageRecord {
                    id: 1001,
                    timestamp: "2024-04-29T03:25:03.613Z".into(),
                    report_name: Some("Short Lease Report".into()),
                    credits: 60.0,
                },
            ],
            total_credits: 61.6,
            chart_data: Some(vec![ChartPoint {
                date: "bogus".into(),
                credits: -1.0,
            }]),
        }
    }

    #[test]
    fn pending_fetch_is_loading() {
        let state = DashboardState::from_fetch::<String, _>(None, &Utc);
        assert_eq!(state, DashboardState::Loading);
    }

    #[test]
    fn success_keeps_fetch_order_and_derives_chart() {
        let resp = response();
        let state = DashboardState::from_fetch::<String, _>(Some(&Ok(resp.clone())), &Utc);
        let view = match state {
            DashboardState::Ready(view) => view,
            other => panic!("expected ready, got {other:?}"),
        };
        assert_eq!(view.usage, resp.usage);
        assert_eq!(view.total_credits, 61.6);
        // server chart data is ignored in favour of the local aggregation
        assert_eq!(
            view.chart,
            vec![ChartPoint {
                date: "29-04-2024".into(),
                credits: 61.6
            }]
        );
    }

    #[test]
    fn server_error_collapses_to_generic_message() {
        let fetch: Result<UsageResponse, String> =
            Err("GET http://localhost:8000/usage failed with status 500".into());
        assert_eq!(
            DashboardState::from_fetch(Some(&fetch), &Utc),
            DashboardState::Error(FETCH_ERROR_MESSAGE.to_string())
        );
    }
}
