use discontinuity_scan::core::sampling::{linspace, sample};
use discontinuity_scan::{
    detect_checked, detect_discontinuities, BuiltinFunction, FunctionKind, RealFunction,
};

fn scan(kind: FunctionKind, x_min: f64, x_max: f64, n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let f = BuiltinFunction::new(kind);
    let sampled = sample(&f, x_min, x_max, n).unwrap();
    let found = detect_discontinuities(sampled.x(), sampled.y(), f.identifier());
    (sampled.x().to_vec(), sampled.y().to_vec(), found)
}

fn assert_sorted_unique(values: &[f64]) {
    for pair in values.windows(2) {
        assert!(pair[0] < pair[1], "not strictly ascending: {:?}", values);
    }
}

#[test]
fn test_results_are_sorted_and_unique_for_every_builtin() {
    for kind in FunctionKind::ALL {
        for &(lo, hi, n) in &[(-5.0, 5.0, 500), (-3.0, 3.0, 700), (-1.0, 1.0, 101), (0.5, 7.5, 100)] {
            let (_, _, found) = scan(kind, lo, hi, n);
            assert_sorted_unique(&found);
            for v in &found {
                assert_eq!((v * 1e6).round() / 1e6, *v);
            }
        }
    }
}

#[test]
fn test_detection_is_idempotent() {
    let (x, y, first) = scan(FunctionKind::Reciprocal, -5.0, 5.0, 500);
    let second = detect_discontinuities(&x, &y, "1/x");
    assert_eq!(first, second);
}

#[test]
fn test_sign_straddling_zero_gives_exactly_zero() {
    for &(lo, hi, n) in &[(-1.0, 1.0, 200), (-5.0, 5.0, 500), (-0.3, 2.0, 150)] {
        let (x, _, found) = scan(FunctionKind::Sign, lo, hi, n);
        assert!(!x.contains(&0.0));
        assert_eq!(found, vec![0.0], "range [{}, {}] with {} points", lo, hi, n);
    }
}

#[test]
fn test_reciprocal_flags_zero_and_only_large_jumps() {
    let (x, y, found) = scan(FunctionKind::Reciprocal, -5.0, 5.0, 500);
    assert!(found.contains(&0.0));

    for &location in found.iter().filter(|&&v| v != 0.0) {
        let i = x
            .iter()
            .position(|&xi| (xi * 1e6).round() / 1e6 == location)
            .expect("location is a sample point");
        assert!(i > 0);
        let jump = (y[i] - y[i - 1]).abs();
        assert!(jump > 1.5 || !jump.is_finite(), "jump {} at {}", jump, location);
    }
}

#[test]
fn test_reciprocal_with_exact_zero_sample_flags_neighbours() {
    let (_, _, found) = scan(FunctionKind::Reciprocal, -1.0, 1.0, 101);
    // 1/0 is infinite, so both pairs touching x = 0 are flagged
    assert!(found.contains(&0.0));
    assert!(found.contains(&0.02));
}

#[test]
fn test_floor_flags_each_spanned_integer_once() {
    let (x, _, found) = scan(FunctionKind::Floor, -3.0, 3.0, 700);
    let step = x[1] - x[0];

    assert_eq!(found.len(), 6, "found {:?}", found);
    for (k, &location) in [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0].iter().zip(&found) {
        assert!(
            location >= k - 1e-6 && location <= k + step + 1e-6,
            "integer {} matched by {}",
            k,
            location
        );
    }
    // The right endpoint is an exact integer sample
    assert_eq!(*found.last().unwrap(), 3.0);
    // The left endpoint is not a crossing
    assert!(found.iter().all(|&v| v > -3.0 + 1e-6));
}

#[test]
fn test_floor_coarse_sampling_records_one_location_per_pair() {
    let x = [0.5, 3.5, 4.5];
    let f = BuiltinFunction::new(FunctionKind::Floor);
    let y = f.eval_all(&x);
    // 0.5 -> 3.5 spans three integers and a jump of 3; still one location
    assert_eq!(detect_discontinuities(&x, &y, "floor(x)"), vec![3.5, 4.5]);
}

#[test]
fn test_heaviside_small_jump_is_caught_by_zero_rule() {
    let (_, _, found) = scan(FunctionKind::Heaviside, -1.0, 1.0, 200);
    assert_eq!(found, vec![0.0]);

    // Without the zero rule the 0 -> 1 jump stays under the threshold
    let f = BuiltinFunction::new(FunctionKind::Heaviside);
    let x = linspace(-1.0, 1.0, 200);
    let y = f.eval_all(&x);
    assert!(detect_discontinuities(&x, &y, "step").is_empty());
}

#[test]
fn test_unrecognized_continuous_function_has_no_discontinuities() {
    for &(lo, hi, n) in &[(-5.0, 5.0, 500), (-10.0, 10.0, 2000), (0.0, 3.0, 100)] {
        let x = linspace(lo, hi, n);
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();
        assert!(detect_discontinuities(&x, &y, "x^2").is_empty());
    }
}

#[test]
fn test_fewer_than_two_samples_is_empty() {
    assert!(detect_discontinuities(&[], &[], "sign(x)").is_empty());
    assert!(detect_discontinuities(&[0.0], &[0.0], "floor(x)").is_empty());
}

#[test]
fn test_known_jumps_match_a_dense_scan() {
    for &(kind, lo, hi, n) in &[
        (FunctionKind::Floor, -3.0, 3.0, 700),
        (FunctionKind::Sign, -1.0, 1.0, 200),
        (FunctionKind::Heaviside, 0.5, 7.5, 100),
    ] {
        let rule = kind.crossing_rule().unwrap();
        let (_, _, found) = scan(kind, lo, hi, n);
        assert_eq!(rule.known_jumps_in(lo, hi).len(), found.len(), "{}", kind);
    }
}

#[test]
fn test_checked_detection_of_sampled_builtin() {
    let f = BuiltinFunction::new(FunctionKind::Heaviside);
    let sampled = sample(&f, -1.0, 1.0, 200).unwrap();
    assert_eq!(detect_checked(&sampled, &f), vec![0.0]);
}
