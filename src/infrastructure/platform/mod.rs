pub mod http_bridge;
pub mod noop;
