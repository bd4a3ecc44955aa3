pub mod report_markup;
pub mod report_source;
pub mod trading_platform;
