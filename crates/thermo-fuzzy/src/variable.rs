//! Linguistic variables and the variable registry.
//!
//! A variable (e.g. `temperature`) owns a set of named terms (e.g. `cold`,
//! `hot`), each bound to a membership function. The registry resolves
//! `(variable, term)` pairs by name once, at rule-base compile time; the
//! compiled inference path works on indices only.

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};
use crate::membership::MembershipFunction;

/// Reserved wildcard term. Matches every input with membership 1.0 and is
/// never stored on a variable.
pub const ANY_TERM: &str = "any";

/// A named linguistic term bound to a membership function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    #[serde(flatten)]
    pub shape: MembershipFunction,
}

impl Term {
    pub fn new(name: impl Into<String>, shape: MembershipFunction) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// A named input variable and its terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub terms: Vec<Term>,
}

impl Variable {
    pub fn new(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }
}

/// Immutable collection of variables, validated on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRegistry {
    variables: Vec<Variable>,
}

impl VariableRegistry {
    /// Build a registry, rejecting duplicate names, a declared `any` term,
    /// and malformed membership functions.
    pub fn new(variables: Vec<Variable>) -> FuzzyResult<Self> {
        for (i, var) in variables.iter().enumerate() {
            if variables[..i].iter().any(|v| v.name == var.name) {
                return Err(FuzzyError::DuplicateVariable(var.name.clone()));
            }
            for (j, term) in var.terms.iter().enumerate() {
                if term.name == ANY_TERM {
                    return Err(FuzzyError::ReservedTerm(term.name.clone()));
                }
                if var.terms[..j].iter().any(|t| t.name == term.name) {
                    return Err(FuzzyError::DuplicateTerm {
                        variable: var.name.clone(),
                        term: term.name.clone(),
                    });
                }
                term.shape.validate()?;
            }
        }
        Ok(Self { variables })
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Index of a variable by name.
    pub fn variable_index(&self, name: &str) -> FuzzyResult<usize> {
        self.variables
            .iter()
            .position(|v| v.name == name)
            .ok_or_else(|| FuzzyError::UnknownVariable(name.to_string()))
    }

    /// Index of a term within a variable. `any` has no index; callers
    /// handle it before resolving.
    pub fn term_index(&self, var_idx: usize, term: &str) -> FuzzyResult<usize> {
        let var = &self.variables[var_idx];
        var.terms
            .iter()
            .position(|t| t.name == term)
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: var.name.clone(),
                term: term.to_string(),
            })
    }

    /// Membership of a crisp value in a term, by name.
    ///
    /// The reserved `any` term evaluates to 1.0 on every variable without
    /// touching stored functions. Unknown names are configuration errors;
    /// the compiled inference path resolves them once and never hits this
    /// failure at evaluation time.
    pub fn membership(&self, variable: &str, term: &str, x: f64) -> FuzzyResult<f64> {
        if term == ANY_TERM {
            return Ok(1.0);
        }
        let var_idx = self.variable_index(variable)?;
        let term_idx = self.term_index(var_idx, term)?;
        Ok(self.membership_at(var_idx, term_idx, x))
    }

    /// Membership by resolved indices. Infallible; used by compiled rules.
    pub fn membership_at(&self, var_idx: usize, term_idx: usize, x: f64) -> f64 {
        self.variables[var_idx].terms[term_idx].shape.evaluate(x)
    }
}
