use crate::SessionError;
use mtrandom::Mt19937;

/// Draw one integer uniformly from `[min, max]`, both ends inclusive.
pub fn draw(rng: &mut Mt19937, min: i32, max: i32) -> Result<i32, SessionError> {
    rng.gen_range_inclusive(min, max)
        .ok_or(SessionError::InvertedRange { min, max })
}

/// Expected sum of `seeds` draws from `[min, max]` if the generator were perfectly uniform.
///
/// Each value in the range is assumed to come up exactly `seeds / range` times.
/// The division truncates, so the remainder `seeds % range` is dropped:
/// `uniform_avg(1, 5, 7)` counts every value once and returns 15, not 21.
///
/// The sum over the range is taken in closed form. Consecutive integers
/// `min..=max` sum to `(min + max) * range / 2`, and that product is always even.
pub fn uniform_avg(min: i32, max: i32, seeds: i32) -> i64 {
    let range = max as i128 - min as i128 + 1;
    if range <= 0 {
        return 0;
    }

    // Truncates toward zero, like the integer division it models
    let dist = seeds as i128 / range;

    let range_sum = (min as i128 + max as i128) * range / 2;
    (dist * range_sum) as i64
}

/// Positive difference between two numbers, by comparison and subtraction.
pub fn difference(first: i64, second: i64) -> i64 {
    if first > second {
        first - second
    } else {
        second - first
    }
}

/// Untruncated average of `sum` over `tries`, or `None` for zero tries.
pub fn exact_average(sum: i64, tries: i32) -> Option<f64> {
    if tries == 0 {
        None
    } else {
        Some(sum as f64 / tries as f64)
    }
}
