//! Membership function shapes.
//!
//! A membership function maps a crisp sensor reading to a degree of
//! membership in `[0, 1]`. Evaluation is total: any finite input yields a
//! valid degree, and inputs outside the support yield exactly 0.

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};

/// A shaped membership function over a crisp input domain.
///
/// Parameters must satisfy `a <= b <= c` (triangular) or `a <= b <= c <= d`
/// (trapezoidal). A zero-width ascent or descent (`a == b`, `c == d`) is a
/// vertical step: membership jumps between 0 and 1 at that point instead of
/// interpolating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MembershipFunction {
    /// Ascends from 0 at `a` to 1 at `b`, descends back to 0 at `c`.
    Triangular { a: f64, b: f64, c: f64 },
    /// Ascends from 0 at `a` to 1 at `b`, plateaus until `c`, descends to 0 at `d`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    /// Checked triangular constructor.
    pub fn triangular(a: f64, b: f64, c: f64) -> FuzzyResult<Self> {
        let mf = Self::Triangular { a, b, c };
        mf.validate()?;
        Ok(mf)
    }

    /// Checked trapezoidal constructor.
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> FuzzyResult<Self> {
        let mf = Self::Trapezoidal { a, b, c, d };
        mf.validate()?;
        Ok(mf)
    }

    /// Check the parameter ordering invariant.
    ///
    /// Deserialized shapes bypass the checked constructors, so rule-base
    /// compilation calls this on every stored function.
    pub fn validate(&self) -> FuzzyResult<()> {
        match *self {
            Self::Triangular { a, b, c } => {
                if !(a.is_finite() && b.is_finite() && c.is_finite()) {
                    return Err(FuzzyError::Membership(format!(
                        "triangular({a}, {b}, {c}): parameters must be finite"
                    )));
                }
                if !(a <= b && b <= c) {
                    return Err(FuzzyError::Membership(format!(
                        "triangular({a}, {b}, {c}): requires a <= b <= c"
                    )));
                }
            }
            Self::Trapezoidal { a, b, c, d } => {
                if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite()) {
                    return Err(FuzzyError::Membership(format!(
                        "trapezoidal({a}, {b}, {c}, {d}): parameters must be finite"
                    )));
                }
                if !(a <= b && b <= c && c <= d) {
                    return Err(FuzzyError::Membership(format!(
                        "trapezoidal({a}, {b}, {c}, {d}): requires a <= b <= c <= d"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Evaluate the degree of membership of a crisp value.
    ///
    /// Total over any numeric input; the result is clamped to `[0, 1]`.
    /// Each division below is guarded structurally: the branch conditions
    /// guarantee a nonzero span, so degenerate parameters take the step
    /// branches instead of dividing by zero.
    pub fn evaluate(&self, x: f64) -> f64 {
        let degree = match *self {
            Self::Triangular { a, b, c } => {
                if x < a || x > c {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else if x > b {
                    (c - x) / (c - b)
                } else {
                    1.0
                }
            }
            Self::Trapezoidal { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else if x <= c {
                    1.0
                } else {
                    (d - x) / (d - c)
                }
            }
        };
        degree.clamp(0.0, 1.0)
    }

    /// The interval outside which membership is exactly 0.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            Self::Triangular { a, c, .. } => (a, c),
            Self::Trapezoidal { a, d, .. } => (a, d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangular_shape() {
        let mf = MembershipFunction::triangular(22.0, 25.0, 28.0).unwrap();
        assert_eq!(mf.evaluate(25.0), 1.0);
        assert_eq!(mf.evaluate(23.5), 0.5);
        assert_eq!(mf.evaluate(26.5), 0.5);
        assert_eq!(mf.evaluate(22.0), 0.0);
        assert_eq!(mf.evaluate(28.0), 0.0);
    }

    #[test]
    fn trapezoidal_shape() {
        let mf = MembershipFunction::trapezoidal(15.0, 18.0, 22.0, 25.0).unwrap();
        assert_eq!(mf.evaluate(20.0), 1.0);
        assert_eq!(mf.evaluate(16.5), 0.5);
        assert_eq!(mf.evaluate(23.5), 0.5);
        assert_eq!(mf.evaluate(14.0), 0.0);
        assert_eq!(mf.evaluate(26.0), 0.0);
    }

    #[test]
    fn zero_outside_support() {
        let tri = MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap();
        let trap = MembershipFunction::trapezoidal(0.0, 2.0, 8.0, 10.0).unwrap();
        for x in [-100.0, -0.001, 10.001, 1e9] {
            assert_eq!(tri.evaluate(x), 0.0);
            assert_eq!(trap.evaluate(x), 0.0);
        }
    }

    #[test]
    fn always_in_unit_interval() {
        let mf = MembershipFunction::trapezoidal(0.0, 10.0, 30.0, 40.0).unwrap();
        let mut x = -50.0;
        while x <= 90.0 {
            let v = mf.evaluate(x);
            assert!((0.0..=1.0).contains(&v), "evaluate({x}) = {v}");
            x += 0.25;
        }
    }

    #[test]
    fn degenerate_span_is_a_step() {
        // a == b: instantaneous ascent.
        let mf = MembershipFunction::triangular(5.0, 5.0, 10.0).unwrap();
        assert_eq!(mf.evaluate(4.999), 0.0);
        assert_eq!(mf.evaluate(5.0), 1.0);
        assert_eq!(mf.evaluate(7.5), 0.5);

        // c == d: instantaneous descent.
        let mf = MembershipFunction::trapezoidal(0.0, 2.0, 8.0, 8.0).unwrap();
        assert_eq!(mf.evaluate(8.0), 1.0);
        assert_eq!(mf.evaluate(8.001), 0.0);
    }

    #[test]
    fn rejects_bad_ordering() {
        assert!(MembershipFunction::triangular(5.0, 2.0, 10.0).is_err());
        assert!(MembershipFunction::trapezoidal(0.0, 4.0, 3.0, 10.0).is_err());
        assert!(MembershipFunction::triangular(0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn serde_tagged_roundtrip() {
        let mf = MembershipFunction::trapezoidal(25.0, 28.0, 35.0, 40.0).unwrap();
        let toml_str = toml::to_string(&mf).unwrap();
        assert!(toml_str.contains("type = \"trapezoidal\""));
        let back: MembershipFunction = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, mf);
    }
}
