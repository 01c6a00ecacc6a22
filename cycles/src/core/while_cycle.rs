//! Count of divisions until a value drops below a threshold.

use anyhow::{Result, bail};
use tracing::debug;

use crate::config::LoopConfig;

/// Upper bound on divisions before the loop gives up.
pub const MAX_STEPS: u32 = 1_000_000;

/// Halve `n` until it is below `0.1`, returning the number of halvings.
///
/// This is the smallest `c` with `n / 2^c < 0.1`; values already below the
/// threshold (including zero and negatives) take no steps. Non-finite input
/// is rejected, as is any input needing more than [`MAX_STEPS`] divisions.
pub fn while_cycle(n: f64) -> Result<u32> {
    let cfg = LoopConfig::default();
    count_divisions(n, cfg.threshold, cfg.divisor)
}

/// Like [`while_cycle`], with the threshold and divisor taken from `cfg`.
pub fn while_cycle_with(n: f64, cfg: &LoopConfig) -> Result<u32> {
    cfg.validate()?;
    count_divisions(n, cfg.threshold, cfg.divisor)
}

fn count_divisions(n: f64, threshold: f64, divisor: f64) -> Result<u32> {
    if !n.is_finite() {
        bail!("dividend must be a finite number, got {n}");
    }
    let mut value = n;
    let mut steps: u32 = 0;
    while value >= threshold {
        if steps == MAX_STEPS {
            bail!("dividend {n} needs more than {MAX_STEPS} divisions by {divisor}");
        }
        value /= divisor;
        steps += 1;
    }
    debug!(n, threshold, divisor, steps, "while cycle done");
    Ok(steps)
}
