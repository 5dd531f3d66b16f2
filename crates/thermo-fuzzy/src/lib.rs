//! thermo-fuzzy — generalized fuzzy-logic evaluation core.
//!
//! Maps crisp sensor readings to a crisp result plus a linguistic label via
//! hand-authored weighted rules:
//!
//! ```text
//! RuleBaseSpec (TOML)              RuleBase (compiled, immutable)
//!   ├── variables + term shapes ──▶ VariableRegistry (index-resolved)
//!   ├── weighted rules ──────────▶ CompiledRule (clause indices)
//!   ├── output levels ───────────▶ crisp consequent values
//!   └── label bands ─────────────▶ numeric → linguistic mapping
//!
//! RuleBase::infer(inputs) → Inference { numeric, label }
//! ```
//!
//! All validation happens at compile time ([`RuleBase::compile`]):
//! membership-function ordering, variable/term references, output terms,
//! weights, and bands. Inference itself is pure, total, and deterministic.
//! A compiled `RuleBase` is `Send + Sync` and safe to share behind an `Arc`
//! across unbounded concurrent callers; reloading means compiling a fresh
//! instance and swapping the reference.

pub mod config;
pub mod engine;
pub mod error;
pub mod membership;
pub mod rules;
pub mod variable;

pub use config::{Band, Bands, Clause, OutputLevel, Rule, RuleBaseSpec};
pub use engine::{Inference, Inputs};
pub use error::{FuzzyError, FuzzyResult};
pub use membership::MembershipFunction;
pub use rules::RuleBase;
pub use variable::{ANY_TERM, Term, Variable, VariableRegistry};
