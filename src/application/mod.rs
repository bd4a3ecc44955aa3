pub mod aggregate;
pub mod analyze;
pub mod extract;
pub mod live_feed;
pub mod report_analysis;
