//! Compiled, immutable rule base.
//!
//! `RuleBase::compile` turns a raw [`RuleBaseSpec`] into the runtime
//! structure inference runs against. Every name in the spec is resolved
//! exactly once here: antecedent clauses become variable/term indices,
//! consequents become crisp output values. Compilation is atomic — any
//! invalid reference fails the whole build and no partially valid rule base
//! is observable.
//!
//! A compiled rule base is immutable and `Send + Sync`; share it behind an
//! `Arc` across concurrent inference calls. To reload rules, compile a new
//! instance and swap the reference, never mutate in place.

use tracing::debug;

use crate::config::{Bands, OutputLevel, Rule, RuleBaseSpec};
use crate::error::{FuzzyError, FuzzyResult};
use crate::variable::{ANY_TERM, VariableRegistry};

/// An antecedent clause resolved to registry indices. `any` clauses are
/// dropped during compilation (min-identity), so every compiled clause
/// points at a real term.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompiledClause {
    pub(crate) variable: usize,
    pub(crate) term: usize,
}

/// A rule with its consequent resolved to a crisp output value.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) clauses: Vec<CompiledClause>,
    pub(crate) weight: f64,
    pub(crate) output_value: f64,
}

/// Validated, immutable rule base: registry, ordered rules, output-level
/// mapping, and label bands.
#[derive(Debug, Clone)]
pub struct RuleBase {
    pub(crate) registry: VariableRegistry,
    pub(crate) compiled: Vec<CompiledRule>,
    pub(crate) fallback: f64,
    rules: Vec<Rule>,
    outputs: Vec<OutputLevel>,
    bands: Bands,
}

impl RuleBase {
    /// Validate and compile a raw spec.
    pub fn compile(spec: RuleBaseSpec) -> FuzzyResult<Self> {
        let registry = VariableRegistry::new(spec.variables)?;

        if spec.outputs.is_empty() {
            return Err(FuzzyError::InvalidOutput("no output levels defined".into()));
        }
        for (i, out) in spec.outputs.iter().enumerate() {
            if spec.outputs[..i].iter().any(|o| o.term == out.term) {
                return Err(FuzzyError::InvalidOutput(format!(
                    "duplicate output term '{}'",
                    out.term
                )));
            }
            if !out.value.is_finite() {
                return Err(FuzzyError::InvalidOutput(format!(
                    "output term '{}' has non-finite value",
                    out.term
                )));
            }
        }

        validate_bands(&spec.bands)?;
        if !spec.fallback.is_finite() {
            return Err(FuzzyError::InvalidOutput("fallback must be finite".into()));
        }

        let mut compiled = Vec::with_capacity(spec.rules.len());
        for (index, rule) in spec.rules.iter().enumerate() {
            if !(rule.weight > 0.0 && rule.weight <= 1.0) {
                return Err(FuzzyError::InvalidRule {
                    index,
                    detail: format!("weight {} outside (0, 1]", rule.weight),
                });
            }

            let mut clauses = Vec::with_capacity(rule.when.len());
            for clause in &rule.when {
                let variable = registry.variable_index(&clause.variable)?;
                if clause.term == ANY_TERM {
                    continue;
                }
                let term = registry.term_index(variable, &clause.term)?;
                clauses.push(CompiledClause { variable, term });
            }

            let output_value = spec
                .outputs
                .iter()
                .find(|o| o.term == rule.then)
                .map(|o| o.value)
                .ok_or_else(|| FuzzyError::UnknownOutput(rule.then.clone()))?;

            compiled.push(CompiledRule {
                clauses,
                weight: rule.weight,
                output_value,
            });
        }

        debug!(
            variables = registry.variables().len(),
            rules = compiled.len(),
            "compiled rule base"
        );

        Ok(Self {
            registry,
            compiled,
            fallback: spec.fallback,
            rules: spec.rules,
            outputs: spec.outputs,
            bands: spec.bands,
        })
    }

    /// The declarative rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// Output term → representative crisp value mapping.
    pub fn outputs(&self) -> &[OutputLevel] {
        &self.outputs
    }

    pub fn bands(&self) -> &Bands {
        &self.bands
    }

    /// Numeric result used when no rule fires.
    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Reconstruct the declarative spec, e.g. for persistence.
    pub fn to_spec(&self) -> RuleBaseSpec {
        RuleBaseSpec {
            fallback: self.fallback,
            variables: self.registry.variables().to_vec(),
            rules: self.rules.clone(),
            outputs: self.outputs.clone(),
            bands: self.bands.clone(),
        }
    }
}

fn validate_bands(bands: &Bands) -> FuzzyResult<()> {
    if bands.otherwise.is_empty() {
        return Err(FuzzyError::InvalidBands("empty 'otherwise' label".into()));
    }
    for (i, band) in bands.thresholds.iter().enumerate() {
        if !band.below.is_finite() {
            return Err(FuzzyError::InvalidBands(format!(
                "threshold {} is not finite",
                band.below
            )));
        }
        if band.label.is_empty() {
            return Err(FuzzyError::InvalidBands("empty band label".into()));
        }
        if let Some(prev) = i.checked_sub(1).map(|p| &bands.thresholds[p])
            && prev.below >= band.below
        {
            return Err(FuzzyError::InvalidBands(format!(
                "thresholds not ascending: {} then {}",
                prev.below, band.below
            )));
        }
    }
    Ok(())
}
