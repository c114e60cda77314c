use serde::{Deserialize, Serialize};

/// One billed event as returned by `GET /usage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: i64,
    pub timestamp: String, // ISO-8601, offset optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
    pub credits: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageResponse {
    pub usage: Vec<UsageRecord>,
    pub total_credits: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<ChartPoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String, // dd-mm-yyyy
    pub credits: f64, // sum for that day, 2 decimals
}
