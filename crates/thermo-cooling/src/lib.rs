//! thermo-cooling — cooling decision adapter over the fuzzy core.
//!
//! Turns raw server/environment data into actionable cooling parameters:
//!
//! ```text
//! OptimizeRequest (JSON)
//!   └── aggregate: mean temperature, mean heat load, humidity passthrough
//!         └── RuleBase::infer (thermo-fuzzy)
//!               └── derive: fan speed, AC setpoint, savings estimate
//!                     └── CoolingPlan (JSON)
//! ```
//!
//! Missing request fields are resolved by documented defaults and never
//! produce an error. The rule base is loaded once at startup
//! ([`CoolingOptimizer::load_or_init`]) and shared immutably thereafter.

pub mod adapter;
pub mod defaults;
pub mod error;
pub mod types;

pub use adapter::{
    CoolingOptimizer, DEFAULT_HEAT_LOAD, DEFAULT_HUMIDITY, DEFAULT_TEMPERATURE,
};
pub use error::{CoolingError, CoolingResult};
pub use defaults::{VAR_HEAT_LOAD, VAR_HUMIDITY, VAR_TEMPERATURE, default_rule_spec};
pub use types::{CoolingPlan, CoolingSensors, OptimizeRequest, ServerReading};
