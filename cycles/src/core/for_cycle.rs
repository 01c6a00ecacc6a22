//! Sum of even integers over an inclusive range.

use anyhow::{Result, anyhow};
use tracing::debug;

/// Sum every even `k` with `start <= k <= end`.
///
/// An inverted range (`start > end`) is empty and sums to `0`. Evenness is
/// Euclidean, so negative bounds behave like positive ones. Returns an error
/// only if the final sum does not fit in `i64`.
pub fn for_cycle(start: i64, end: i64) -> Result<i64> {
    let first = i128::from(start) + i128::from(start.rem_euclid(2));
    let last = i128::from(end) - i128::from(end.rem_euclid(2));
    if first > last {
        return Ok(0);
    }

    // Arithmetic series; both ends are even so the midpoint is exact.
    let count = (last - first) / 2 + 1;
    let total = count * ((first + last) / 2);
    let sum = i64::try_from(total)
        .map_err(|_| anyhow!("sum of even numbers in [{start}, {end}] overflows i64"))?;
    debug!(start, end, sum, "for cycle done");
    Ok(sum)
}
