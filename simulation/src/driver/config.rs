//! Vehicle configuration.
//!
//! Defaults describe an ordinary passenger car. Keys accept either the descriptive field
//! name or the short physics symbol (`l`, `s0`, `T`, `v_max`, `a_max`, `b_max`, `x`, `v`,
//! `a`).

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VehicleConfig {
    /// Vehicle length (m)
    #[serde(alias = "l")]
    pub length: f32,
    /// Bumper-to-bumper distance kept at standstill (m)
    #[serde(alias = "s0")]
    pub min_spacing: f32,
    /// Desired time gap to the leader (s)
    #[serde(alias = "T")]
    pub desired_time_headway: f32,
    /// Desired free-road speed (m/s)
    #[serde(alias = "v_max")]
    pub max_speed: f32,
    /// (m/s²)
    #[serde(alias = "a_max")]
    pub max_acceleration: f32,
    /// (m/s²)
    #[serde(alias = "b_max")]
    pub comfortable_deceleration: f32,

    #[serde(alias = "x")]
    pub position: f32,
    #[serde(alias = "v")]
    pub speed: f32,
    #[serde(alias = "a")]
    pub acceleration: f32,
    pub stopped: bool,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            length: 4.0,
            min_spacing: 4.0,
            desired_time_headway: 1.0,
            max_speed: 16.6,
            max_acceleration: 1.44,
            comfortable_deceleration: 4.61,
            position: 0.0,
            speed: 0.0,
            acceleration: 0.0,
            stopped: false,
        }
    }
}

impl VehicleConfig {
    /// Overwrite a single attribute by name.
    ///
    /// `stopped` is set by any non-zero finite value.
    pub fn set(&mut self, key: &str, value: f32) -> Result<(), ConfigError> {
        match key {
            "stopped" if !value.is_finite() => {
                return Err(ConfigError::NonFinite {
                    key: "stopped",
                    value,
                })
            }
            "length" | "l" => self.length = value,
            "min_spacing" | "s0" => self.min_spacing = value,
            "desired_time_headway" | "T" => self.desired_time_headway = value,
            "max_speed" | "v_max" => self.max_speed = value,
            "max_acceleration" | "a_max" => self.max_acceleration = value,
            "comfortable_deceleration" | "b_max" => self.comfortable_deceleration = value,
            "position" | "x" => self.position = value,
            "speed" | "v" => self.speed = value,
            "acceleration" | "a" => self.acceleration = value,
            "stopped" => self.stopped = value != 0.0,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Defaults merged with `overrides`, later keys winning. The result is validated.
    pub fn with_overrides<'a>(
        overrides: impl IntoIterator<Item = (&'a str, f32)>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (key, value) in overrides {
            config.set(key, value)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numeric = [
            ("length", self.length),
            ("min_spacing", self.min_spacing),
            ("desired_time_headway", self.desired_time_headway),
            ("max_speed", self.max_speed),
            ("max_acceleration", self.max_acceleration),
            ("comfortable_deceleration", self.comfortable_deceleration),
            ("position", self.position),
            ("speed", self.speed),
            ("acceleration", self.acceleration),
        ];
        for (key, value) in numeric {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { key, value });
            }
        }

        // The acceleration law divides by these.
        let divisors = [
            ("max_speed", self.max_speed),
            ("max_acceleration", self.max_acceleration),
            ("comfortable_deceleration", self.comfortable_deceleration),
        ];
        for (key, value) in divisors {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { key, value });
            }
        }

        Ok(())
    }
}
