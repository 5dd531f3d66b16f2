//! Inference over a compiled rule base.
//!
//! Weighted-rule evaluation with min-AND antecedents and weighted-average
//! defuzzification:
//!
//! ```text
//! for each rule:
//!     strength      = min(membership of each clause) * rule.weight
//!     weighted_sum += strength * consequent_crisp_value
//!     total_weight += strength
//!
//! numeric = weighted_sum / total_weight   (fallback when nothing fires)
//! label   = first band with numeric < band.below, else `otherwise`
//! ```
//!
//! Pure and deterministic: no I/O, no randomness, cost linear in rule
//! count. There is no error path — inputs outside every term's support
//! simply contribute zero strength and degrade toward the fallback.

use std::collections::HashMap;

use crate::rules::RuleBase;

/// Crisp input vector, keyed by variable name.
pub type Inputs = HashMap<String, f64>;

/// Result of one inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    /// Defuzzified numeric result.
    pub numeric: f64,
    /// Linguistic label from the configured threshold bands.
    pub label: String,
}

impl RuleBase {
    /// Evaluate all rules against a crisp input vector.
    ///
    /// A variable missing from `inputs` contributes zero membership to any
    /// clause naming it, so rules touching it cannot fire.
    pub fn infer(&self, inputs: &Inputs) -> Inference {
        let resolved: Vec<Option<f64>> = self
            .registry
            .variables()
            .iter()
            .map(|v| inputs.get(&v.name).copied())
            .collect();

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for rule in &self.compiled {
            let mut strength: f64 = 1.0;
            for clause in &rule.clauses {
                let Some(x) = resolved[clause.variable] else {
                    strength = 0.0;
                    break;
                };
                strength = strength.min(self.registry.membership_at(clause.variable, clause.term, x));
                if strength == 0.0 {
                    break;
                }
            }

            let strength = strength * rule.weight;
            weighted_sum += strength * rule.output_value;
            total_weight += strength;
        }

        let numeric = if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            self.fallback
        };

        Inference {
            numeric,
            label: self.label_for(numeric).to_string(),
        }
    }

    /// Map a numeric result to its linguistic label via the threshold bands.
    pub fn label_for(&self, numeric: f64) -> &str {
        for band in &self.bands().thresholds {
            if numeric < band.below {
                return &band.label;
            }
        }
        &self.bands().otherwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Band, Bands, Clause, OutputLevel, Rule, RuleBaseSpec};
    use crate::membership::MembershipFunction;
    use crate::variable::{Term, Variable};

    /// Two-variable rule base: temperature (cold/hot) and load (low/high).
    fn rule_base() -> RuleBase {
        let spec = RuleBaseSpec {
            fallback: 50.0,
            variables: vec![
                Variable::new(
                    "temperature",
                    vec![
                        Term::new(
                            "cold",
                            MembershipFunction::trapezoidal(15.0, 18.0, 22.0, 25.0).unwrap(),
                        ),
                        Term::new(
                            "hot",
                            MembershipFunction::trapezoidal(25.0, 28.0, 35.0, 40.0).unwrap(),
                        ),
                    ],
                ),
                Variable::new(
                    "load",
                    vec![
                        Term::new(
                            "low",
                            MembershipFunction::trapezoidal(0.0, 10.0, 30.0, 40.0).unwrap(),
                        ),
                        Term::new(
                            "high",
                            MembershipFunction::trapezoidal(60.0, 70.0, 90.0, 100.0).unwrap(),
                        ),
                    ],
                ),
            ],
            rules: vec![
                Rule {
                    when: vec![
                        Clause::new("temperature", "cold"),
                        Clause::new("load", "low"),
                    ],
                    then: "gentle".into(),
                    weight: 1.0,
                },
                Rule {
                    when: vec![Clause::new("temperature", "hot"), Clause::new("load", "any")],
                    then: "aggressive".into(),
                    weight: 0.9,
                },
            ],
            outputs: vec![
                OutputLevel {
                    term: "gentle".into(),
                    value: 10.0,
                },
                OutputLevel {
                    term: "aggressive".into(),
                    value: 70.0,
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
        };
        RuleBase::compile(spec).unwrap()
    }

    fn inputs(pairs: &[(&str, f64)]) -> Inputs {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn single_rule_fires_at_full_strength() {
        let rb = rule_base();
        let out = rb.infer(&inputs(&[("temperature", 20.0), ("load", 20.0)]));
        assert_eq!(out.numeric, 10.0);
        assert_eq!(out.label, "very_low");
    }

    #[test]
    fn no_rule_fires_yields_fallback() {
        let rb = rule_base();
        // Between cold and hot supports, load between low and high.
        let out = rb.infer(&inputs(&[("temperature", 25.0), ("load", 50.0)]));
        assert_eq!(out.numeric, 50.0);
        assert_eq!(out.label, "medium");
    }

    #[test]
    fn deterministic_across_calls() {
        let rb = rule_base();
        let input = inputs(&[("temperature", 26.5), ("load", 75.0)]);
        let first = rb.infer(&input);
        for _ in 0..10 {
            assert_eq!(rb.infer(&input), first);
        }
    }

    #[test]
    fn result_bounded_by_firing_consequents() {
        let rb = rule_base();
        // Both rules partially fire around the cold/hot boundary.
        let out = rb.infer(&inputs(&[("temperature", 24.0), ("load", 25.0)]));
        assert!(out.numeric >= 10.0 && out.numeric <= 70.0);
    }

    #[test]
    fn missing_input_disables_rules_naming_it() {
        let rb = rule_base();
        // No load reading: the cold+low rule cannot fire; the hot rule's
        // `any` clause was compiled away, so it still can.
        let out = rb.infer(&inputs(&[("temperature", 30.0)]));
        assert_eq!(out.numeric, 70.0);
        assert_eq!(out.label, "high");

        let nothing = rb.infer(&Inputs::new());
        assert_eq!(nothing.numeric, 50.0);
    }

    #[test]
    fn weight_scales_but_does_not_shift_single_rule() {
        // With one firing rule, weight cancels in the weighted average.
        let rb = rule_base();
        let out = rb.infer(&inputs(&[("temperature", 30.0), ("load", 50.0)]));
        assert_eq!(out.numeric, 70.0);
    }

    #[test]
    fn label_bands_cover_the_range() {
        let rb = rule_base();
        assert_eq!(rb.label_for(0.0), "very_low");
        assert_eq!(rb.label_for(19.999), "very_low");
        assert_eq!(rb.label_for(20.0), "low");
        assert_eq!(rb.label_for(59.9), "medium");
        assert_eq!(rb.label_for(79.9), "high");
        assert_eq!(rb.label_for(80.0), "very_high");
        assert_eq!(rb.label_for(100.0), "very_high");
    }
}
