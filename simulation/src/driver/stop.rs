//! Stop commands.
//!
//! A stopped vehicle ignores the car-following law and brakes in proportion to its speed,
//! `a = −b_max · v / v_max`, so braking fades out as it comes to rest. Whoever issued the
//! stop also clears it; the next tick after [`Vehicle::resume`] follows the IDM again.

use crate::driver::{Idm, Vehicle};

impl Idm {
    pub fn stop_acceleration(&self, speed: f32) -> f32 {
        -self.comfortable_deceleration * speed / self.max_speed
    }
}

impl Vehicle {
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn resume(&mut self) {
        self.stopped = false;
    }

    /// Replace the acceleration just computed for the next tick if a stop is in effect.
    pub(crate) fn apply_stop_override(&mut self) {
        if self.stopped {
            self.acceleration = self.idm.stop_acceleration(self.speed);
        }
    }
}
