pub mod numbers;
pub mod positions;
pub mod summary;
