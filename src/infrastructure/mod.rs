pub mod platform;
pub mod report;
