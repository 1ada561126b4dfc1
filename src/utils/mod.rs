pub mod dashboard_stats;
pub mod record_filter;
pub mod time_format;
