//! Position/velocity integration under constant acceleration.

/// Advance `(position, speed)` by `dt` seconds at constant `acceleration`.
///
/// If the step would end at a negative speed, the vehicle instead brakes to a standstill
/// inside the step: it covers the stopping distance `v² / (2·|a|)` and ends at exactly
/// zero speed. Otherwise position uses the speed at the start of the step.
///
/// The returned speed is never negative for a non-negative input speed.
pub fn integrate(position: f32, speed: f32, acceleration: f32, dt: f32) -> (f32, f32) {
    if speed + acceleration * dt < 0.0 {
        // Only reachable with acceleration < 0.
        let stopping_distance = -0.5 * speed * speed / acceleration;
        (position + stopping_distance, 0.0)
    } else {
        (
            position + speed * dt + acceleration * dt * dt / 2.0,
            speed + acceleration * dt,
        )
    }
}
