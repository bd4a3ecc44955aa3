pub mod data_source;
pub mod deal_entry;
pub mod money;
pub mod summary_stats;
pub mod text;
