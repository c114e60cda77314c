pub mod usage_chart_view;
pub mod usage_dashboard;
pub mod usage_summary_card;
pub mod usage_table;

pub use usage_chart_view::UsageChartView;
pub use usage_dashboard::UsageDashboard;
pub use usage_summary_card::UsageSummaryCard;
pub use usage_table::UsageTable;
