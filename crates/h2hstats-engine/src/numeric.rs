// Exact decimal helpers shared by the calculators.

use rust_decimal::{Decimal, MathematicalOps};

/// `numerator / denominator`, or `None` when the denominator is zero.
pub fn ratio(numerator: Decimal, denominator: u32) -> Option<Decimal> {
    if denominator == 0 {
        return None;
    }
    Some(numerator / Decimal::from(denominator))
}

/// `100 * part / whole`, or zero when the whole is zero.
pub fn share(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    Decimal::ONE_HUNDRED * part / whole
}

/// Statistical median. Even-length input averages the two middle values.
///
/// Returns `None` for an empty slice.
pub fn median(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / Decimal::TWO)
    }
}

/// Population standard deviation (N denominator).
///
/// `None` for an empty slice, zero for a single value.
pub fn population_std_dev(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let n = Decimal::from(values.len());
    let mean = values.iter().copied().sum::<Decimal>() / n;
    let variance = values
        .iter()
        .map(|v| {
            let diff = *v - mean;
            diff * diff
        })
        .sum::<Decimal>()
        / n;
    if variance.is_zero() {
        return Some(Decimal::ZERO);
    }
    variance.sqrt()
}
