pub mod analysis_result;
pub mod closed_trade;
pub mod trade_history;
