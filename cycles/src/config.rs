//! Loop parameters stored in `cycles.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Smallest accepted `divisor`.
pub const MIN_DIVISOR: f64 = 1.000_001;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "cycles.toml";

/// Loop configuration (TOML).
///
/// Missing fields default to the lesson values: stop below `0.1`, halve on
/// every step, and replace every third character with `_`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoopConfig {
    /// `while` stops once the running value drops below this.
    pub threshold: f64,

    /// `while` divides the running value by this on every step.
    pub divisor: f64,

    /// `do-while` writes this in place of every replaced character.
    pub placeholder: char,

    /// `do-while` replaces characters at 1-indexed positions divisible by this.
    pub stride: usize,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            divisor: 2.0,
            placeholder: '_',
            stride: 3,
        }
    }
}

impl LoopConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(anyhow!("threshold must be a finite number > 0"));
        }
        if !self.divisor.is_finite() || self.divisor < MIN_DIVISOR {
            return Err(anyhow!("divisor must be a finite number >= {MIN_DIVISOR}"));
        }
        if self.stride == 0 {
            return Err(anyhow!("stride must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LoopConfig::default()`.
pub fn load_config(path: &Path) -> Result<LoopConfig> {
    if !path.exists() {
        return Ok(LoopConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LoopConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Render config as a single JSON line or as pretty TOML with a trailing
/// newline.
pub fn render_config(cfg: &LoopConfig, as_json: bool) -> Result<String> {
    if as_json {
        let mut buf = serde_json::to_string(cfg).context("serialize config json")?;
        buf.push('\n');
        return Ok(buf);
    }
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}
