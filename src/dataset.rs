//! Serde model for the grid dataset document (`grid-data.json`).
//!
//! The document comes out of a spreadsheet export, so scalar fields are
//! loosely typed: a line can be a number or a glyph string, a score can be a
//! number or a numeric string, a time can be an ISO timestamp or free text.
//! Every such field deserializes into [`RawValue`] and goes through an
//! explicit coercion accessor instead of relying on field types.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Player name -> week name -> raw score value.
pub type Standings = HashMap<String, HashMap<String, RawValue>>;

/// A scalar of unknown type coming from the JSON document.
///
/// `Other` absorbs anything that isn't a number, string, or null (bools,
/// arrays, nested objects) so a single malformed cell never fails the whole
/// document parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Null,
    Other(serde_json::Value),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Null
    }
}

impl RawValue {
    /// Strict numeric read: only an already-finite JSON number qualifies.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
            || matches!(self, RawValue::Other(serde_json::Value::Null))
    }

    /// True when the value carries anything displayable at all.
    pub fn is_present(&self) -> bool {
        match self {
            RawValue::Number(n) => n.is_finite(),
            RawValue::Text(s) => !s.trim().is_empty(),
            _ => false,
        }
    }

    /// Lenient numeric coercion used by score resolution: numbers pass
    /// through, strings are stripped of everything outside `[0-9.+-]` and
    /// then parsed. Never panics; anything else is `None`.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if n.is_finite() => Some(*n),
            RawValue::Text(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
                    .collect();
                cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Display form: the string verbatim (trimmed), or the number rendered
    /// without a trailing `.0`.
    pub fn display_string(&self) -> Option<String> {
        match self {
            RawValue::Number(n) if n.is_finite() => {
                if n.fract() == 0.0 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(format!("{}", n))
                }
            }
            RawValue::Text(s) => {
                let t = s.trim();
                if t.is_empty() { None } else { Some(t.to_string()) }
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default, rename = "generatedAt")]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub weeks: Vec<Week>,
    #[serde(default)]
    pub standings: Standings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Week {
    #[serde(default)]
    pub name: String,
    // Schedule rows can be null placeholders in the export.
    #[serde(default)]
    pub schedule: Vec<Option<Game>>,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub opponent: String,
    #[serde(default)]
    pub line: RawValue,
    #[serde(default)]
    pub opponent_line: RawValue,
    #[serde(default)]
    pub date: RawValue,
    #[serde(default)]
    pub time: RawValue,
    /// Set on synthesized entries only: the player whose best bet produced
    /// this row. The export never populates it.
    #[serde(default)]
    pub source_player: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_points: RawValue,
    #[serde(default)]
    pub best_bet: Option<BestBet>,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BestBet {
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub line: RawValue,
    #[serde(default)]
    pub time: RawValue,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pick {
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub points: RawValue,
    #[serde(default)]
    pub awarded_points: RawValue,
    #[serde(default)]
    pub result: Option<String>,
}

impl Dataset {
    /// Parse a dataset from a JSON string. The only fallible boundary in the
    /// crate besides file I/O; everything downstream degrades instead of
    /// erroring.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse grid dataset JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
        let dataset = Self::from_json(&content)?;
        tracing::debug!(weeks = dataset.weeks.len(), "parsed dataset {}", path.display());
        Ok(dataset)
    }

    /// Week lookup by its unique name (the UI selector key).
    pub fn week(&self, name: &str) -> Option<&Week> {
        self.weeks.iter().find(|w| w.name == name)
    }

    pub fn week_names(&self) -> Vec<&str> {
        self.weeks.iter().map(|w| w.name.as_str()).collect()
    }
}
