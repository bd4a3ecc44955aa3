use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Round a monetary amount to cents for output. Sums are kept at full
/// precision until this point.
pub fn round2(value: Decimal) -> f64 {
    value.round_dp(2).to_f64().unwrap_or(0.0)
}

/// Same as `round2` for amounts the platform hands over as floats.
pub fn round2_f64(value: f64) -> f64 {
    Decimal::from_f64(value).map(round2).unwrap_or(0.0)
}

/// Round a ratio to four decimals for output.
pub fn round4(value: Decimal) -> f64 {
    value.round_dp(4).to_f64().unwrap_or(0.0)
}
