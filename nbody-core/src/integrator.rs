use glam::DVec3;

use crate::body::Body;

/// Advance every body by dt using semi-implicit Euler integration
///
/// `v += a*dt`, then `x += v*dt` with the updated velocity. The new position is
/// appended to the body's trajectory.
///
/// # Panics
///
/// If `trajectories` is not index-aligned with `bodies` (different lengths).
pub fn step(bodies: &mut [Body], trajectories: &mut [Vec<DVec3>], dt: f64) {
    assert_eq!(
        bodies.len(),
        trajectories.len(),
        "one trajectory per body is required"
    );

    for (body, trajectory) in bodies.iter_mut().zip(trajectories.iter_mut()) {
        body.velocity += body.acceleration * dt;
        body.position += body.velocity * dt;
        trajectory.push(body.position);
    }
}
