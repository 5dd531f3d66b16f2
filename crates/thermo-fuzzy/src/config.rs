//! Declarative rule-base configuration (TOML).
//!
//! `RuleBaseSpec` is the raw serde model of a rule file: variables and
//! their term shapes, weighted rules, output levels, label bands, and the
//! no-rule-fired fallback. It carries no invariants of its own — everything
//! is validated when the spec is compiled into a [`RuleBase`].
//!
//! [`RuleBase`]: crate::rules::RuleBase

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FuzzyError, FuzzyResult};
use crate::variable::Variable;

/// One antecedent clause: a `(variable, term)` pair. The reserved term
/// `any` matches every input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub variable: String,
    pub term: String,
}

impl Clause {
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

/// A weighted implication: AND-ed antecedent clauses producing one output
/// term. Rules are order-preserving for auditability; aggregation itself is
/// commutative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Antecedent clauses, combined with fuzzy AND (min).
    pub when: Vec<Clause>,
    /// Consequent output term; must appear in the output levels.
    pub then: String,
    /// Rule weight in `(0, 1]`.
    pub weight: f64,
}

/// An output term and its representative crisp value, used by
/// weighted-average defuzzification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputLevel {
    pub term: String,
    pub value: f64,
}

/// One threshold band: numeric results below `below` (and above any earlier
/// band) get `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub below: f64,
    pub label: String,
}

/// Threshold bands mapping a defuzzified numeric result to a linguistic
/// label. Thresholds must be strictly ascending; results at or above the
/// last threshold get `otherwise`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    pub thresholds: Vec<Band>,
    pub otherwise: String,
}

/// Raw, unvalidated rule-base configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBaseSpec {
    /// Numeric result when no rule fires with nonzero strength.
    #[serde(default = "default_fallback")]
    pub fallback: f64,
    pub variables: Vec<Variable>,
    pub rules: Vec<Rule>,
    pub outputs: Vec<OutputLevel>,
    pub bands: Bands,
}

fn default_fallback() -> f64 {
    50.0
}

impl RuleBaseSpec {
    /// Load a rule file. Unreadable or malformed files are fatal
    /// configuration errors.
    pub fn from_file(path: &Path) -> FuzzyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FuzzyError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| FuzzyError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Persist the spec as pretty TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> FuzzyResult<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| FuzzyError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| FuzzyError::Write {
            path: path.display().to_string(),
            source,
        })
    }
}
