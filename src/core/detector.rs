//! Discontinuity detection over a sampled function.
//!
//! Every consecutive sample pair is checked against these rules, first match
//! wins:
//!
//! 1. either value is NaN or infinite: flag the right-hand x;
//! 2. zero-crossing functions whose pair straddles 0: flag exactly `0.0`;
//! 3. integer-crossing functions whose pair spans an integer: flag the
//!    right-hand x (one location per pair, however many integers it spans);
//! 4. absolute jump above [`JUMP_THRESHOLD`]: flag the right-hand x.
//!
//! Flagged locations are rounded to [`ROUND_DECIMALS`] places, de-duplicated
//! and returned ascending. Two real discontinuities closer than 1e-6 collapse
//! into one.

use crate::core::catalog::{CrossingRule, FunctionKind, RealFunction};
use crate::domain::model::SampledFunction;

pub const JUMP_THRESHOLD: f64 = 1.5;
pub const ROUND_DECIMALS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    NonFinite,
    ZeroCrossing,
    IntegerCrossing,
    Jump,
}

/// Scans `x`/`y` for the function named `function_identifier`.
///
/// Never fails. Identifiers outside the catalog only get the non-finite and
/// jump rules. Fewer than two samples gives an empty result, and lengths that
/// disagree are scanned up to the shorter one; build a [`SampledFunction`]
/// and use [`detect_checked`] to reject such input instead.
pub fn detect_discontinuities(x: &[f64], y: &[f64], function_identifier: &str) -> Vec<f64> {
    let rule = FunctionKind::from_identifier(function_identifier).and_then(|k| k.crossing_rule());
    detect_with_rule(x, y, rule)
}

/// Scans already validated samples of `f`, applying its own crossing rule.
pub fn detect_checked<F: RealFunction + ?Sized>(samples: &SampledFunction, f: &F) -> Vec<f64> {
    detect_sampled(samples, f.crossing_rule())
}

pub fn detect_sampled(samples: &SampledFunction, rule: Option<CrossingRule>) -> Vec<f64> {
    detect_with_rule(samples.x(), samples.y(), rule)
}

pub fn detect_with_rule(x: &[f64], y: &[f64], rule: Option<CrossingRule>) -> Vec<f64> {
    let n = x.len().min(y.len());
    if n < 2 {
        return Vec::new();
    }

    let mut locations = Vec::new();
    for i in 1..n {
        if let Some((trigger, location)) = classify_pair(x[i - 1], y[i - 1], x[i], y[i], rule) {
            tracing::trace!(index = i, ?trigger, location, "discontinuity candidate");
            locations.push(location);
        }
    }

    normalize(locations)
}

fn classify_pair(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    rule: Option<CrossingRule>,
) -> Option<(Trigger, f64)> {
    if !y0.is_finite() || !y1.is_finite() {
        return Some((Trigger::NonFinite, x1));
    }

    match rule {
        Some(CrossingRule::Zero) if x0 < 0.0 && 0.0 < x1 => {
            return Some((Trigger::ZeroCrossing, 0.0));
        }
        Some(CrossingRule::Integer) if x0.floor() != x1.floor() => {
            return Some((Trigger::IntegerCrossing, x1));
        }
        _ => {}
    }

    if (y1 - y0).abs() > JUMP_THRESHOLD {
        Some((Trigger::Jump, x1))
    } else {
        None
    }
}

/// Rounds, sorts ascending and drops duplicates.
fn normalize(mut locations: Vec<f64>) -> Vec<f64> {
    for v in locations.iter_mut() {
        // `+ 0.0` turns -0.0 into 0.0
        *v = round_half_even(*v, ROUND_DECIMALS) + 0.0;
    }
    locations.sort_by(|a, b| a.total_cmp(b));
    locations.dedup();
    locations
}

pub fn round_half_even(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let y = x * scale;
    if !y.is_finite() {
        // |x| is too large to carry any fractional digits
        return x;
    }
    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }
    z / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_than_two_samples_is_empty() {
        assert!(detect_discontinuities(&[], &[], "sign(x)").is_empty());
        assert!(detect_discontinuities(&[1.0], &[f64::NAN], "1/x").is_empty());
    }

    #[test]
    fn test_non_finite_takes_priority_over_zero_crossing() {
        let x = [-0.5, 0.5];
        let y = [f64::NEG_INFINITY, 2.0];
        assert_eq!(detect_discontinuities(&x, &y, "1/x"), vec![0.5]);
    }

    #[test]
    fn test_zero_crossing_requires_strict_straddle() {
        let x = [-0.1, 0.0, 0.1];
        let y = [-1.0, 0.0, 1.0];
        assert!(detect_discontinuities(&x, &y, "sign(x)").is_empty());
    }

    #[test]
    fn test_integer_crossing_records_one_location_per_pair() {
        let x = [0.5, 3.5];
        let y = [0.0, 3.0];
        assert_eq!(detect_discontinuities(&x, &y, "floor(x)"), vec![3.5]);
    }

    #[test]
    fn test_recognized_function_falls_back_to_jump_rule() {
        let x = [1.0, 2.0];
        let y = [0.0, 5.0];
        assert_eq!(detect_discontinuities(&x, &y, "Heaviside(x)"), vec![2.0]);
    }

    #[test]
    fn test_unknown_identifier_uses_generic_rules_only() {
        let x = [-0.5, 0.5, 1.0];
        let y = [0.0, 1.0, 1.2];
        assert!(detect_discontinuities(&x, &y, "my_step").is_empty());
        assert_eq!(detect_discontinuities(&x, &[0.0, 2.0, 2.1], "my_step"), vec![0.5]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let x = [0.0, 1.0];
        assert!(detect_discontinuities(&x, &[0.0, 1.5], "g").is_empty());
        assert_eq!(detect_discontinuities(&x, &[0.0, 1.5000001], "g"), vec![1.0]);
    }

    #[test]
    fn test_locations_are_rounded_and_deduplicated() {
        let x = [0.0, 1.0000001, 1.0000002];
        let y = [0.0, 10.0, 20.0];
        assert_eq!(detect_discontinuities(&x, &y, "g"), vec![1.0]);
    }

    #[test]
    fn test_negative_zero_collapses_with_zero() {
        let x = [-1.0, -0.0000001, 0.0000001];
        let y = [0.0, 5.0, f64::NAN];
        assert_eq!(detect_discontinuities(&x, &y, "g"), vec![0.0]);
    }

    #[test]
    fn test_mismatched_lengths_scan_shorter_prefix() {
        let x = [-1.0, 1.0, 2.0];
        let y = [-1.0, 1.0];
        assert_eq!(detect_discontinuities(&x, &y, "sign(x)"), vec![0.0]);
    }

    struct UnitStep;

    impl RealFunction for UnitStep {
        fn identifier(&self) -> &str {
            "step"
        }

        fn eval(&self, x: f64) -> f64 {
            if x < 0.0 {
                0.0
            } else {
                1.0
            }
        }

        fn crossing_rule(&self) -> Option<CrossingRule> {
            Some(CrossingRule::Zero)
        }
    }

    #[test]
    fn test_checked_detection_uses_the_function_rule() {
        let x = vec![-1.0, -0.25, 0.5, 1.0];
        let y = x.iter().map(|&v| UnitStep.eval(v)).collect();
        let samples = SampledFunction::new(x, y).unwrap();

        // The 0 -> 1 step is under the jump threshold, only the rule catches it
        assert_eq!(detect_checked(&samples, &UnitStep), vec![0.0]);
        assert!(detect_sampled(&samples, None).is_empty());

        let dynamic: &dyn RealFunction = &UnitStep;
        assert_eq!(detect_checked(&samples, dynamic), vec![0.0]);
    }

    #[test]
    fn test_huge_locations_stay_finite() {
        let x = [0.0, 1e303];
        let y = [0.0, 5.0];
        assert_eq!(detect_discontinuities(&x, &y, "g"), vec![1e303]);
        assert_eq!(round_half_even(-1e303, ROUND_DECIMALS), -1e303);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.5, 0), 0.0);
        assert_eq!(round_half_even(1.5, 0), 2.0);
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(1.23456789, 6), 1.234568);
    }
}
