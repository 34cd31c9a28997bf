//! Integration test: long-run relaxation of a cube towards its bath.
//!
//! Drives a field through many steps and checks it against an independent
//! reference pass every step, then verifies the run converges to the bath
//! temperature. A final case runs above the stability bound to confirm the
//! field accepts it and the boundary still holds.

use thermocube_field::{compute_alpha, is_stable, DiffusionField, MAX_STABLE_ALPHA};
use thermocube_test_utils::{boundary_coords, distinct_interior, max_abs_diff, reference_step};

#[test]
fn every_step_matches_reference_over_long_run() {
    let size = 9;
    let mut field = DiffusionField::from_interior_fn(size, 0.0, distinct_interior).unwrap();
    let mut expected = field.as_slice().to_vec();

    for step in 0..200 {
        let alpha = if step % 2 == 0 { 0.12 } else { MAX_STABLE_ALPHA };
        field.step(alpha).unwrap();
        expected = reference_step(&expected, size, alpha);
        assert!(
            max_abs_diff(field.as_slice(), &expected) < 1e-9,
            "diverged from reference at step {step}"
        );
    }
    assert_eq!(field.steps_taken().0, 200);
}

#[test]
fn cube_converges_to_bath() {
    let mut field = DiffusionField::new(6, 20.0, 100.0).unwrap();
    for _ in 0..2_000 {
        field.step(MAX_STABLE_ALPHA).unwrap();
    }
    let stats = field.interior_stats();
    assert!(stats.min > 99.999, "interior min {} not at bath", stats.min);
    assert!(stats.max <= 100.0 + 1e-9);
    assert!(field.residual() < 1e-3);
}

#[test]
fn physical_alpha_moves_slowly_but_monotonically() {
    // 1 m concrete cube at 5 cells, dt = 0.1 s.
    let alpha = compute_alpha(2.0, 2400.0, 1000.0, 0.1, 0.2).unwrap();
    assert!(is_stable(alpha));

    let mut field = DiffusionField::new(5, 20.0, 100.0).unwrap();
    let mut prev_centre = field.temperature_at(2, 2, 2).unwrap();
    for _ in 0..50 {
        field.step(alpha).unwrap();
        let centre = field.temperature_at(2, 2, 2).unwrap();
        assert!(centre >= prev_centre);
        prev_centre = centre;
    }
    let edge = field.temperature_at(1, 2, 2).unwrap();
    assert!(edge > 20.0 && edge < 21.0, "edge-adjacent cell at {edge}");
}

#[test]
fn unstable_alpha_is_accepted_and_boundary_holds() {
    let mut field = DiffusionField::new(5, 0.0, 10.0).unwrap();
    for _ in 0..30 {
        field.step(0.5).unwrap();
    }
    let stats = field.interior_stats();
    assert!(
        stats.max > 10.0 || stats.min < 0.0,
        "alpha 0.5 should overshoot the bath range"
    );
    for [x, y, z] in boundary_coords(5) {
        assert_eq!(field.temperature_at(x, y, z).unwrap(), 10.0);
    }
}
