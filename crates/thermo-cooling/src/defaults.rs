//! Built-in cooling rule configuration.
//!
//! Hand-authored fuzzy sets and rules for datacenter cooling. This is the
//! spec written to disk on first start when no rule file exists; operators
//! re-tune by editing the file, not this module.

use thermo_fuzzy::{
    Band, Bands, Clause, MembershipFunction, OutputLevel, Rule, RuleBaseSpec, Term, Variable,
};

/// Input variable: mean server inlet temperature, °C.
pub const VAR_TEMPERATURE: &str = "temperature";
/// Input variable: ambient relative humidity, percent.
pub const VAR_HUMIDITY: &str = "humidity";
/// Input variable: aggregate server heat load, percent.
pub const VAR_HEAT_LOAD: &str = "heat_load";

/// The default cooling rule base.
pub fn default_rule_spec() -> RuleBaseSpec {
    // Literal shapes; RuleBase::compile re-validates every stored function.
    let trap = |a, b, c, d| MembershipFunction::Trapezoidal { a, b, c, d };
    let tri = |a, b, c| MembershipFunction::Triangular { a, b, c };

    let rule = |when: &[(&str, &str)], then: &str, weight: f64| Rule {
        when: when.iter().map(|(v, t)| Clause::new(*v, *t)).collect(),
        then: then.into(),
        weight,
    };

    RuleBaseSpec {
        fallback: 50.0,
        variables: vec![
            Variable::new(
                VAR_TEMPERATURE,
                vec![
                    Term::new("cold", trap(15.0, 18.0, 22.0, 25.0)),
                    Term::new("normal", tri(22.0, 25.0, 28.0)),
                    Term::new("hot", trap(25.0, 28.0, 35.0, 40.0)),
                ],
            ),
            Variable::new(
                VAR_HUMIDITY,
                vec![
                    Term::new("low", trap(20.0, 25.0, 35.0, 40.0)),
                    Term::new("normal", tri(35.0, 45.0, 55.0)),
                    Term::new("high", trap(50.0, 60.0, 70.0, 80.0)),
                ],
            ),
            Variable::new(
                VAR_HEAT_LOAD,
                vec![
                    Term::new("low", trap(0.0, 10.0, 30.0, 40.0)),
                    Term::new("medium", tri(30.0, 50.0, 70.0)),
                    Term::new("high", trap(60.0, 70.0, 90.0, 100.0)),
                ],
            ),
        ],
        rules: vec![
            // Cold room with little heat: barely cool at all.
            rule(
                &[
                    (VAR_TEMPERATURE, "cold"),
                    (VAR_HUMIDITY, "any"),
                    (VAR_HEAT_LOAD, "low"),
                ],
                "very_low",
                1.0,
            ),
            rule(
                &[
                    (VAR_TEMPERATURE, "normal"),
                    (VAR_HUMIDITY, "normal"),
                    (VAR_HEAT_LOAD, "low"),
                ],
                "low",
                0.8,
            ),
            rule(
                &[
                    (VAR_TEMPERATURE, "normal"),
                    (VAR_HUMIDITY, "any"),
                    (VAR_HEAT_LOAD, "medium"),
                ],
                "medium",
                0.7,
            ),
            // Hot room or high heat load independently demand strong cooling.
            rule(
                &[
                    (VAR_TEMPERATURE, "hot"),
                    (VAR_HUMIDITY, "any"),
                    (VAR_HEAT_LOAD, "any"),
                ],
                "high",
                0.9,
            ),
            rule(
                &[
                    (VAR_TEMPERATURE, "any"),
                    (VAR_HUMIDITY, "any"),
                    (VAR_HEAT_LOAD, "high"),
                ],
                "high",
                0.9,
            ),
            // Hot and humid is the worst case.
            rule(
                &[
                    (VAR_TEMPERATURE, "hot"),
                    (VAR_HUMIDITY, "high"),
                    (VAR_HEAT_LOAD, "any"),
                ],
                "very_high",
                1.0,
            ),
        ],
        outputs: vec![
            OutputLevel {
                term: "very_low".into(),
                value: 10.0,
            },
            OutputLevel {
                term: "low".into(),
                value: 30.0,
            },
            OutputLevel {
                term: "medium".into(),
                value: 50.0,
            },
            OutputLevel {
                term: "high".into(),
                value: 70.0,
            },
            OutputLevel {
                term: "very_high".into(),
                value: 90.0,
            },
        ],
        bands: Bands {
            thresholds: vec![
                Band {
                    below: 20.0,
                    label: "very_low".into(),
                },
                Band {
                    below: 40.0,
                    label: "low".into(),
                },
                Band {
                    below: 60.0,
                    label: "medium".into(),
                },
                Band {
                    below: 80.0,
                    label: "high".into(),
                },
            ],
            otherwise: "very_high".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermo_fuzzy::RuleBase;

    #[test]
    fn default_spec_compiles() {
        let rb = RuleBase::compile(default_rule_spec()).unwrap();
        assert_eq!(rb.registry().variables().len(), 3);
        assert_eq!(rb.rules().len(), 6);
        assert_eq!(rb.outputs().len(), 5);
    }

    #[test]
    fn default_spec_roundtrips_through_toml() {
        let spec = default_rule_spec();
        let toml_str = toml::to_string_pretty(&spec).unwrap();
        let back: RuleBaseSpec = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, spec);
    }
}
