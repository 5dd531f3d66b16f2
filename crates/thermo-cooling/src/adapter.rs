//! Cooling decision adapter.
//!
//! Bridges raw server/environment readings and the fuzzy engine: aggregates
//! heterogeneous per-server records into the engine's three crisp inputs,
//! runs inference, and derives actionable control parameters from the
//! defuzzified result.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use thermo_fuzzy::{Inputs, RuleBase, RuleBaseSpec};

use crate::defaults::{VAR_HEAT_LOAD, VAR_HUMIDITY, VAR_TEMPERATURE, default_rule_spec};
use crate::error::CoolingResult;
use crate::types::{CoolingPlan, OptimizeRequest};

/// Default mean inlet temperature (°C) when no server reports one.
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
/// Default aggregate heat load (percent) when no server reports utilization.
pub const DEFAULT_HEAT_LOAD: f64 = 50.0;
/// Default ambient humidity (percent) when the cooling plant reports none.
pub const DEFAULT_HUMIDITY: f64 = 45.0;

/// CPU contribution to a server's heat output.
const CPU_WEIGHT: f64 = 0.7;
/// Memory contribution to a server's heat output.
const MEMORY_WEIGHT: f64 = 0.3;

/// Stateless cooling optimizer over a shared, immutable rule base.
///
/// `optimize` never mutates shared state; one optimizer can serve
/// arbitrarily many concurrent requests.
#[derive(Debug, Clone)]
pub struct CoolingOptimizer {
    rules: Arc<RuleBase>,
}

impl CoolingOptimizer {
    pub fn new(rules: Arc<RuleBase>) -> Self {
        Self { rules }
    }

    /// Load the rule file at `path`, or seed it with the built-in defaults
    /// when it does not exist yet.
    ///
    /// A present-but-corrupt file is a fatal configuration error; the
    /// optimizer must not start with a partially valid rule base.
    pub fn load_or_init(path: &Path) -> CoolingResult<Self> {
        let spec = if path.exists() {
            info!(path = %path.display(), "loading cooling rules");
            RuleBaseSpec::from_file(path)?
        } else {
            info!(path = %path.display(), "no rule file found, writing defaults");
            let spec = default_rule_spec();
            spec.save(path)?;
            spec
        };
        Ok(Self::new(Arc::new(RuleBase::compile(spec)?)))
    }

    pub fn rule_base(&self) -> &RuleBase {
        &self.rules
    }

    /// Derive a cooling plan from a request.
    ///
    /// Missing fields fall back to documented defaults; this path has no
    /// error case.
    pub fn optimize(&self, request: &OptimizeRequest) -> CoolingPlan {
        let inputs = aggregate_inputs(request);
        let inference = self.rules.infer(&inputs);
        let v = inference.numeric;

        debug!(
            numeric = v,
            label = %inference.label,
            servers = request.servers.len(),
            "cooling inference"
        );

        CoolingPlan {
            cooling_level: inference.label,
            fan_speed_percent: v.floor() as u32,
            // Inverse linear relationship: more cooling, lower setpoint.
            ac_temperature_setpoint: round_to(24.0 - (v - 50.0) / 10.0, 1),
            expected_power_savings: round_to((100.0 - v) * 0.05, 2),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Collapse a request into the engine's three crisp inputs.
///
/// - `temperature`: mean of reported server temperatures.
/// - `heat_load`: mean of `0.7 * cpu + 0.3 * memory` per server.
/// - `humidity`: ambient passthrough.
///
/// An empty server collection or missing field takes the corresponding
/// default.
pub(crate) fn aggregate_inputs(request: &OptimizeRequest) -> Inputs {
    let (temperature, heat_load) = if request.servers.is_empty() {
        (DEFAULT_TEMPERATURE, DEFAULT_HEAT_LOAD)
    } else {
        let n = request.servers.len() as f64;
        let temp_sum: f64 = request
            .servers
            .iter()
            .map(|s| s.temperature.unwrap_or(DEFAULT_TEMPERATURE))
            .sum();
        let heat_sum: f64 = request
            .servers
            .iter()
            .map(|s| {
                CPU_WEIGHT * s.cpu.unwrap_or(DEFAULT_HEAT_LOAD)
                    + MEMORY_WEIGHT * s.memory.unwrap_or(DEFAULT_HEAT_LOAD)
            })
            .sum();
        (temp_sum / n, heat_sum / n)
    };

    let humidity = request
        .cooling
        .as_ref()
        .and_then(|c| c.humidity)
        .unwrap_or(DEFAULT_HUMIDITY);

    Inputs::from([
        (VAR_TEMPERATURE.to_string(), temperature),
        (VAR_HUMIDITY.to_string(), humidity),
        (VAR_HEAT_LOAD.to_string(), heat_load),
    ])
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CoolingSensors, ServerReading};

    fn optimizer() -> CoolingOptimizer {
        CoolingOptimizer::new(Arc::new(RuleBase::compile(default_rule_spec()).unwrap()))
    }

    fn server(temperature: f64, cpu: f64, memory: f64) -> ServerReading {
        ServerReading {
            temperature: Some(temperature),
            cpu: Some(cpu),
            memory: Some(memory),
        }
    }

    fn request(servers: Vec<ServerReading>, humidity: Option<f64>) -> OptimizeRequest {
        OptimizeRequest {
            servers,
            cooling: humidity.map(|h| CoolingSensors { humidity: Some(h) }),
        }
    }

    #[test]
    fn aggregates_means_and_heat_weights() {
        let req = request(
            vec![server(20.0, 10.0, 30.0), server(30.0, 50.0, 70.0)],
            Some(55.0),
        );
        let inputs = aggregate_inputs(&req);
        assert_eq!(inputs[VAR_TEMPERATURE], 25.0);
        // (0.7*10 + 0.3*30 + 0.7*50 + 0.3*70) / 2 = (16 + 56) / 2
        assert_eq!(inputs[VAR_HEAT_LOAD], 36.0);
        assert_eq!(inputs[VAR_HUMIDITY], 55.0);
    }

    #[test]
    fn empty_request_takes_all_defaults() {
        let inputs = aggregate_inputs(&OptimizeRequest::default());
        assert_eq!(inputs[VAR_TEMPERATURE], DEFAULT_TEMPERATURE);
        assert_eq!(inputs[VAR_HEAT_LOAD], DEFAULT_HEAT_LOAD);
        assert_eq!(inputs[VAR_HUMIDITY], DEFAULT_HUMIDITY);
    }

    #[test]
    fn missing_per_server_fields_take_field_defaults() {
        let req = request(vec![ServerReading::default()], None);
        let inputs = aggregate_inputs(&req);
        assert_eq!(inputs[VAR_TEMPERATURE], DEFAULT_TEMPERATURE);
        assert_eq!(inputs[VAR_HEAT_LOAD], DEFAULT_HEAT_LOAD);
    }

    #[test]
    fn cool_quiet_room_yields_minimal_cooling() {
        // Only the cold+low rule fires, at full strength.
        let plan = optimizer().optimize(&request(vec![server(20.0, 20.0, 20.0)], Some(30.0)));
        assert_eq!(plan.cooling_level, "very_low");
        assert_eq!(plan.fan_speed_percent, 10);
        assert_eq!(plan.ac_temperature_setpoint, 28.0);
        assert_eq!(plan.expected_power_savings, 4.5);
    }

    #[test]
    fn hot_humid_loaded_room_yields_strong_cooling() {
        // hot (0.72), heat-high (0.9), and hot+humid (0.8) rules fire;
        // weighted average lands near 76.6.
        let plan = optimizer().optimize(&request(vec![server(36.0, 80.0, 80.0)], Some(65.0)));
        assert_eq!(plan.cooling_level, "high");
        assert_eq!(plan.fan_speed_percent, 76);
        assert_eq!(plan.ac_temperature_setpoint, 21.3);
        assert_eq!(plan.expected_power_savings, 1.17);
    }

    #[test]
    fn defaults_match_explicit_midpoint_inputs() {
        let opt = optimizer();
        let defaulted = opt.optimize(&request(vec![], Some(45.0)));
        let explicit = opt.optimize(&request(vec![server(25.0, 50.0, 50.0)], Some(45.0)));
        assert_eq!(defaulted.cooling_level, explicit.cooling_level);
        assert_eq!(defaulted.fan_speed_percent, explicit.fan_speed_percent);
        assert_eq!(
            defaulted.ac_temperature_setpoint,
            explicit.ac_temperature_setpoint
        );
        assert_eq!(
            defaulted.expected_power_savings,
            explicit.expected_power_savings
        );
    }

    #[test]
    fn optimize_is_deterministic_apart_from_timestamp() {
        let opt = optimizer();
        let req = request(vec![server(31.0, 60.0, 40.0)], Some(58.0));
        let a = opt.optimize(&req);
        let b = opt.optimize(&req);
        assert_eq!(a.cooling_level, b.cooling_level);
        assert_eq!(a.fan_speed_percent, b.fan_speed_percent);
        assert_eq!(a.ac_temperature_setpoint, b.ac_temperature_setpoint);
        assert_eq!(a.expected_power_savings, b.expected_power_savings);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let plan = optimizer().optimize(&OptimizeRequest::default());
        assert!(chrono::DateTime::parse_from_rfc3339(&plan.timestamp).is_ok());
    }
}
