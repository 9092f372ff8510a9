//! Intelligent Driver Model (IDM) for car-following behavior.
//!
//! Units:
//! - Distance: meters (m)
//! - Speed: meters per second (m/s)
//! - Acceleration: meters per second squared (m/s²)
//! - Time: seconds (s)
//!
//! The interaction term differs from the textbook IDM: the dynamic part of the desired
//! gap is clamped at zero *before* the ratio is formed,
//!
//! ```text
//! alpha = (s0 + max(0, T·v + Δv·v / (2·sqrt(a·b)))) / Δx
//! a_new = a_max · (1 − (v / v_max)⁴ − alpha²)
//! ```
//!
//! so a leader pulling away never shrinks the desired gap below `s0`. The result is not
//! clamped to the comfortable deceleration.

use crate::driver::{Vehicle, VehicleConfig};

/// Intelligent Driver Model parameters.
///
/// Typical real-world values:
/// - Time headway: 1.0-2.0 s (safe following distance in time)
/// - Min spacing: 2.0-5.0 m (bumper-to-bumper distance at standstill)
/// - Max acceleration: 1.0-3.0 m/s² (comfortable acceleration)
/// - Comfortable deceleration: 1.5-5.0 m/s² (comfortable braking)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Idm {
    pub desired_time_headway: f32,
    pub min_spacing: f32,
    pub max_speed: f32,
    pub max_acceleration: f32,
    pub comfortable_deceleration: f32,
}

/// What a follower can see of the vehicle directly ahead of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leader {
    pub position: f32,
    pub speed: f32,
    pub length: f32,
}

impl Leader {
    /// Bumper-to-bumper distance from a follower whose front is at `position`.
    ///
    /// Positive for any physically valid configuration. Zero or negative means the two
    /// vehicles overlap, which the road/collision layer has to prevent.
    pub fn gap_from(&self, position: f32) -> f32 {
        self.position - position - self.length
    }
}

impl From<&Vehicle> for Leader {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            position: vehicle.position,
            speed: vehicle.speed,
            length: vehicle.length,
        }
    }
}

impl Idm {
    pub fn from_config(config: &VehicleConfig) -> Self {
        Self {
            desired_time_headway: config.desired_time_headway,
            min_spacing: config.min_spacing,
            max_speed: config.max_speed,
            max_acceleration: config.max_acceleration,
            comfortable_deceleration: config.comfortable_deceleration,
        }
    }

    /// `2·sqrt(a_max·b_max)`, always from the parameters currently in effect.
    pub fn sqrt_ab(&self) -> f32 {
        2.0 * (self.max_acceleration * self.comfortable_deceleration).sqrt()
    }

    /// Leader interaction ratio `alpha`.
    ///
    /// Divides by `gap` unguarded: a zero gap yields infinity.
    pub fn interaction(&self, speed: f32, gap: f32, delta_speed: f32) -> f32 {
        let dynamic_gap =
            self.desired_time_headway * speed + delta_speed * speed / self.sqrt_ab();

        (self.min_spacing + dynamic_gap.max(0.0)) / gap
    }

    /// Acceleration to apply on the next tick for a vehicle at `position` driving at
    /// `speed`, optionally following `lead`.
    pub fn acceleration(&self, position: f32, speed: f32, lead: Option<&Leader>) -> f32 {
        let alpha = match lead {
            Some(lead) => self.interaction(speed, lead.gap_from(position), speed - lead.speed),
            None => 0.0,
        };

        self.max_acceleration * (1.0 - (speed / self.max_speed).powi(4) - alpha.powi(2))
    }
}
