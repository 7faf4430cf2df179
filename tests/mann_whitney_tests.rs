use annostat::core::calculator::mann_whitney::{Alternative, TestError, mann_whitney_u};

#[test]
fn empty_sample_is_rejected() {
    let err = mann_whitney_u(&[], &[1.0], Alternative::Less).unwrap_err();
    assert_eq!(err, TestError::EmptySample);
    let err = mann_whitney_u(&[1.0], &[], Alternative::Less).unwrap_err();
    assert_eq!(err, TestError::EmptySample);
}

#[test]
fn fully_separated_small_samples_use_exact_distribution() {
    // All of x below all of y: U2 is maximal, and exactly one of the
    // C(6,3) = 20 arrangements reaches it.
    let test = mann_whitney_u(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], Alternative::Less).unwrap();
    assert_eq!(test.u_statistic, 0.0);
    assert!((test.p_value - 0.05).abs() < 1e-12);
}

#[test]
fn reversed_separation_gives_certainty() {
    let test = mann_whitney_u(&[4.0, 5.0, 6.0], &[1.0, 2.0, 3.0], Alternative::Less).unwrap();
    assert!((test.p_value - 1.0).abs() < 1e-12);
}

#[test]
fn greater_alternative_mirrors_less() {
    let less = mann_whitney_u(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], Alternative::Less).unwrap();
    let greater = mann_whitney_u(&[4.0, 5.0, 6.0], &[1.0, 2.0, 3.0], Alternative::Greater).unwrap();
    assert!((less.p_value - greater.p_value).abs() < 1e-12);
}

#[test]
fn single_observation_per_sample_is_well_defined() {
    // Two orderings of one pair each occur with probability one half, so
    // the favourable direction yields 0.5, not "not available".
    let test = mann_whitney_u(&[-1.0], &[1.0], Alternative::Less).unwrap();
    assert!((test.p_value - 0.5).abs() < 1e-12);

    let test = mann_whitney_u(&[1.0], &[-1.0], Alternative::Less).unwrap();
    assert!((test.p_value - 1.0).abs() < 1e-12);
}

#[test]
fn large_tie_free_samples_use_normal_approximation() {
    let x: Vec<f64> = (1..=9).map(f64::from).collect();
    let y: Vec<f64> = (10..=18).map(f64::from).collect();
    let test = mann_whitney_u(&x, &y, Alternative::Less).unwrap();
    // Reference routine reports ~2.06e-4 for this configuration.
    assert!(test.p_value > 1.9e-4 && test.p_value < 2.2e-4);
}

#[test]
fn tied_values_fall_back_to_corrected_approximation() {
    let test = mann_whitney_u(&[1.0, 2.0], &[2.0, 3.0], Alternative::Less).unwrap();
    // Midranks give U2 = 3.5; tie-corrected z is (3.5 - 2 - 0.5)/sqrt(1.5).
    assert!((test.p_value - 0.2071).abs() < 1e-3);
}

#[test]
fn all_values_tied_is_degenerate() {
    let err = mann_whitney_u(&[0.0, 0.0], &[0.0, 0.0], Alternative::Less).unwrap_err();
    assert_eq!(err, TestError::Degenerate);
}

#[test]
fn permuting_matched_pairs_does_not_change_p_value() {
    let x = [0.2, -1.3, 0.7, -0.5];
    let y = [1.1, 0.4, 1.9, 0.0];
    let base = mann_whitney_u(&x, &y, Alternative::Less).unwrap();

    let x_perm = [0.7, -0.5, 0.2, -1.3];
    let y_perm = [1.9, 0.0, 1.1, 0.4];
    let permuted = mann_whitney_u(&x_perm, &y_perm, Alternative::Less).unwrap();

    assert_eq!(base.p_value, permuted.p_value);
}
