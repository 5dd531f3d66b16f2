//! External request/response shapes for cooling optimization.
//!
//! Requests arrive JSON-shaped from the API boundary. Every input field is
//! optional: absence is resolved by the adapter's documented defaults, never
//! an error.

use serde::{Deserialize, Serialize};

/// Per-server sensor and utilization readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerReading {
    /// Inlet temperature in °C.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// CPU utilization percent.
    #[serde(default)]
    pub cpu: Option<f64>,
    /// Memory utilization percent.
    #[serde(default)]
    pub memory: Option<f64>,
}

/// Ambient readings from the cooling plant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoolingSensors {
    /// Relative humidity percent.
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// A cooling optimization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub servers: Vec<ServerReading>,
    #[serde(default)]
    pub cooling: Option<CoolingSensors>,
}

/// Actionable cooling parameters derived from one inference call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingPlan {
    /// Linguistic cooling intensity (`very_low` .. `very_high`).
    pub cooling_level: String,
    /// Fan speed, floor of the defuzzified level.
    pub fan_speed_percent: u32,
    /// AC setpoint in °C; higher cooling intensity lowers the setpoint.
    pub ac_temperature_setpoint: f64,
    /// Nominal power savings estimate, in arbitrary units.
    pub expected_power_savings: f64,
    /// RFC 3339 timestamp of the evaluation.
    pub timestamp: String,
}
