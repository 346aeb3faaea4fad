//! Unit tests for the pairwise force pass and its kinetic-energy ceiling

use glam::DVec3;
use nbody_core::forces::{compute_accelerations, pair_contribution, PairContribution};
use nbody_core::tests::test_helpers::{approx_eq, unbounded_config, vec_approx_eq};
use nbody_core::{Body, SimulationConfig};

fn ceiling_config(limit: f64, dt: f64) -> SimulationConfig {
    SimulationConfig {
        gravitational_constant: 1.0,
        kinetic_energy_limit: limit,
        min_distance: 1e-3,
        dt,
        steps: 1,
    }
}

#[test]
fn test_gravity_magnitude_and_direction() {
    let mut bodies = vec![
        Body::at_rest(DVec3::ZERO, 1.0),
        Body::at_rest(DVec3::new(3.0, 4.0, 0.0), 2.0), // distance = 5.0
    ];
    let config = unbounded_config(1.0, 0.01, 1);

    let pass = compute_accelerations(&mut bodies, &config);
    assert_eq!(pass.accepted, 2);

    // a_0 = G * m_1 / r^2 toward body 1 = 2/25 * (0.6, 0.8)
    let expected_a = DVec3::new(0.6, 0.8, 0.0) * (2.0 / 25.0);
    // a_1 = G * m_0 / r^2 toward body 0 = 1/25 * (-0.6, -0.8)
    let expected_b = DVec3::new(-0.6, -0.8, 0.0) * (1.0 / 25.0);

    assert!(vec_approx_eq(bodies[0].acceleration, expected_a, 1e-12));
    assert!(vec_approx_eq(bodies[1].acceleration, expected_b, 1e-12));
}

#[test]
fn test_gravity_scales_with_constant() {
    let body = Body::at_rest(DVec3::ZERO, 1.0);
    let other = Body::at_rest(DVec3::new(2.0, 0.0, 0.0), 4.0);

    let weak = pair_contribution(&body, &other, &unbounded_config(1.0, 0.01, 1));
    let strong = pair_contribution(&body, &other, &unbounded_config(3.0, 0.01, 1));

    match (weak, strong) {
        (PairContribution::Accepted(w), PairContribution::Accepted(s)) => {
            assert!(approx_eq(w.x, 1.0, 1e-12));
            assert!(approx_eq(s.x, 3.0, 1e-12));
        }
        other => panic!("expected both accepted, got {:?}", other),
    }
}

#[test]
fn test_coincident_bodies_contribute_nothing() {
    let mut bodies = vec![
        Body::at_rest(DVec3::new(1.0, 1.0, 1.0), 1.0),
        Body::at_rest(DVec3::new(1.0, 1.0, 1.0), 1.0),
    ];
    let config = unbounded_config(1.0, 0.01, 1);

    let pass = compute_accelerations(&mut bodies, &config);

    assert_eq!(bodies[0].acceleration, DVec3::ZERO);
    assert_eq!(bodies[1].acceleration, DVec3::ZERO);
    assert_eq!(pass.too_close, 2);
    assert_eq!(pass.accepted, 0);
}

#[test]
fn test_pair_inside_distance_floor_is_skipped() {
    let body = Body::at_rest(DVec3::ZERO, 1.0);
    let near = Body::at_rest(DVec3::new(5e-4, 0.0, 0.0), 1.0);
    let at_floor = Body::at_rest(DVec3::new(1e-3, 0.0, 0.0), 1.0);
    let config = unbounded_config(1.0, 0.01, 1);

    assert_eq!(pair_contribution(&body, &near, &config), PairContribution::TooClose);
    assert_eq!(pair_contribution(&body, &at_floor, &config), PairContribution::TooClose);
}

#[test]
fn test_ceiling_is_asymmetric_between_pair_members() {
    // Light body 0 would reach KE = 0.5 * 1 * 100^2 = 5000; heavy body 1 only 0.5 * 100 * 1^2 = 50
    let mut bodies = vec![
        Body::at_rest(DVec3::new(-0.5, 0.0, 0.0), 1.0),
        Body::at_rest(DVec3::new(0.5, 0.0, 0.0), 100.0),
    ];
    let config = ceiling_config(100.0, 1.0);

    match pair_contribution(&bodies[0], &bodies[1], &config) {
        PairContribution::Rejected {
            predicted_kinetic_energy,
        } => assert!(approx_eq(predicted_kinetic_energy, 5000.0, 1e-9)),
        other => panic!("expected light body to be rejected, got {:?}", other),
    }
    match pair_contribution(&bodies[1], &bodies[0], &config) {
        PairContribution::Accepted(accel) => {
            assert!(vec_approx_eq(accel, DVec3::new(-1.0, 0.0, 0.0), 1e-12))
        }
        other => panic!("expected heavy body to be accepted, got {:?}", other),
    }

    let pass = compute_accelerations(&mut bodies, &config);

    assert_eq!(pass.accepted, 1);
    assert_eq!(pass.rejected, 1);
    assert_eq!(bodies[0].acceleration, DVec3::ZERO);
    assert!(vec_approx_eq(bodies[1].acceleration, DVec3::new(-1.0, 0.0, 0.0), 1e-12));
}

#[test]
fn test_ceiling_uses_pre_step_velocity() {
    // KE before the step is 50; adding a = 1 for dt = 1 gives 0.5 * 11^2 = 60.5
    let moving = Body::new(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0), 1.0);
    let resting = Body::at_rest(DVec3::ZERO, 1.0);
    let other = Body::at_rest(DVec3::new(1.0, 0.0, 0.0), 1.0);
    let config = ceiling_config(60.0, 1.0);

    assert!(matches!(
        pair_contribution(&moving, &other, &config),
        PairContribution::Rejected { .. }
    ));
    assert!(matches!(
        pair_contribution(&resting, &other, &config),
        PairContribution::Accepted(_)
    ));
}

#[test]
fn test_ceiling_bounds_each_candidate_not_the_sum() {
    // Each candidate alone gives KE 0.5; together they would give 1.0
    let mut bodies = vec![
        Body::at_rest(DVec3::ZERO, 1.0),
        Body::at_rest(DVec3::new(1.0, 0.0, 0.0), 1.0),
        Body::at_rest(DVec3::new(0.0, 1.0, 0.0), 1.0),
    ];
    let config = ceiling_config(0.75, 1.0);

    compute_accelerations(&mut bodies, &config);

    assert!(vec_approx_eq(bodies[0].acceleration, DVec3::new(1.0, 1.0, 0.0), 1e-12));
    let predicted = bodies[0].velocity + bodies[0].acceleration * config.dt;
    assert!(0.5 * bodies[0].mass() * predicted.length_squared() > config.kinetic_energy_limit);
}

#[test]
fn test_every_candidate_rejected_leaves_zero_acceleration() {
    let mut bodies = vec![
        Body::at_rest(DVec3::new(-0.5, 0.0, 0.0), 1.0),
        Body::at_rest(DVec3::new(0.5, 0.0, 0.0), 1.0),
    ];
    let config = ceiling_config(1e-9, 1.0);

    let pass = compute_accelerations(&mut bodies, &config);

    assert_eq!(pass.rejected, 2);
    assert!(bodies.iter().all(|b| b.acceleration == DVec3::ZERO));
}

#[test]
fn test_repeated_pass_resets_acceleration() {
    let mut bodies = vec![
        Body::at_rest(DVec3::ZERO, 2.0),
        Body::at_rest(DVec3::new(1.0, 0.0, 0.0), 1.5),
        Body::new(DVec3::new(0.0, 1.0, 0.5), DVec3::new(0.3, 0.0, 0.0), 1.0),
    ];
    let config = unbounded_config(1.0, 0.01, 1);

    compute_accelerations(&mut bodies, &config);
    let first: Vec<_> = bodies.iter().map(|b| b.acceleration).collect();

    bodies[1].acceleration = DVec3::splat(1e9);
    compute_accelerations(&mut bodies, &config);
    let second: Vec<_> = bodies.iter().map(|b| b.acceleration).collect();

    assert_eq!(first, second);
}

#[test]
fn test_pass_counts_every_ordered_pair() {
    let mut bodies = vec![
        Body::at_rest(DVec3::ZERO, 1.0),
        Body::at_rest(DVec3::new(1.0, 0.0, 0.0), 1.0),
        Body::at_rest(DVec3::new(0.0, 1.0, 0.0), 1.0),
        Body::at_rest(DVec3::new(0.0, 0.0, 1.0), 1.0),
    ];
    let config = unbounded_config(1.0, 0.01, 1);

    let pass = compute_accelerations(&mut bodies, &config);

    assert_eq!(pass.evaluated(), 12);
    assert_eq!(pass.accepted, 12);
}

#[test]
fn test_single_body_feels_nothing() {
    let mut bodies = vec![Body::new(DVec3::ONE, DVec3::X, 3.0)];
    let pass = compute_accelerations(&mut bodies, &unbounded_config(1.0, 0.01, 1));

    assert_eq!(pass.evaluated(), 0);
    assert_eq!(bodies[0].acceleration, DVec3::ZERO);
}
