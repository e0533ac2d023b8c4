//! Rating aggregate

use rust_decimal::Decimal;

/// Arithmetic mean of `ratings`, or zero for an empty slice
pub fn mean_rating(ratings: &[i32]) -> Decimal {
    if ratings.is_empty() {
        return Decimal::ZERO;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    Decimal::from(sum) / Decimal::from(ratings.len())
}
