//! Rendering of operation results for the CLI.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};

/// Loop exercise that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    For,
    While,
    DoWhile,
}

/// One operation's input and output, printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub operation: Operation,
    pub input: Value,
    pub output: Value,
}

impl Report {
    pub fn for_cycle(start: i64, end: i64, sum: i64) -> Self {
        Self {
            operation: Operation::For,
            input: json!({ "start": start, "end": end }),
            output: json!(sum),
        }
    }

    pub fn while_cycle(n: f64, steps: u32) -> Self {
        Self {
            operation: Operation::While,
            input: json!({ "n": n }),
            output: json!(steps),
        }
    }

    pub fn do_while_cycle(text: &str, replaced: &str) -> Self {
        Self {
            operation: Operation::DoWhile,
            input: json!({ "text": text }),
            output: json!(replaced),
        }
    }

    /// Render as a single JSON line or as the bare output value.
    pub fn render(&self, as_json: bool) -> Result<String> {
        if as_json {
            return serde_json::to_string(self).context("serialize report json");
        }
        Ok(match &self.output {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}
