//! Periodic character substitution.

use anyhow::Result;
use tracing::debug;

use crate::config::LoopConfig;

/// Replace every third character of `text` with `_`.
///
/// Positions are 1-indexed and count `char`s, not bytes. Text shorter than
/// three characters comes back unchanged.
pub fn do_while_cycle(text: &str) -> String {
    let cfg = LoopConfig::default();
    substitute_every(text, cfg.placeholder, cfg.stride)
}

/// Like [`do_while_cycle`], with the placeholder and stride taken from `cfg`.
pub fn do_while_cycle_with(text: &str, cfg: &LoopConfig) -> Result<String> {
    cfg.validate()?;
    Ok(substitute_every(text, cfg.placeholder, cfg.stride))
}

/// `stride` must be non-zero.
fn substitute_every(text: &str, placeholder: char, stride: usize) -> String {
    let out: String = text
        .chars()
        .enumerate()
        .map(|(idx, ch)| if (idx + 1) % stride == 0 { placeholder } else { ch })
        .collect();
    debug!(chars = text.chars().count(), stride, "do-while cycle done");
    out
}
