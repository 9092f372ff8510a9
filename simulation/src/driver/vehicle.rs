use bevy_ecs::prelude::*;

use crate::{
    driver::{integrate, Idm, Leader, VehicleConfig},
    ConfigError, Id, IdAllocator, Segment,
};

#[derive(Component, Debug, Clone)]
pub struct Vehicle {
    pub id: Id<Vehicle>,
    pub length: f32,
    pub idm: Idm,
    /// Free-road speed from the configuration, restored by [`Vehicle::unslow`].
    pub configured_max_speed: f32,

    /// Maintained by path assignment, never by [`Vehicle::update`].
    pub path: Vec<Id<Segment>>,
    pub current_road_index: usize,

    /// Distance along the current segment (m)
    pub position: f32,
    pub speed: f32,
    /// Acceleration applied during the next [`Vehicle::update`].
    pub acceleration: f32,
    pub stopped: bool,
}

impl Vehicle {
    pub fn new(ids: &mut IdAllocator<Vehicle>, config: VehicleConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            id: ids.next_id(),
            length: config.length,
            idm: Idm::from_config(&config),
            configured_max_speed: config.max_speed,
            path: vec![],
            current_road_index: 0,
            position: config.position,
            speed: config.speed,
            acceleration: config.acceleration,
            stopped: config.stopped,
        })
    }

    pub fn with_path(mut self, path: Vec<Id<Segment>>) -> Self {
        self.path = path;
        self
    }

    /// Advance one tick of `dt` seconds behind `lead`.
    ///
    /// Position and speed move with the acceleration chosen on the previous tick; the
    /// acceleration for the next tick is computed afterwards from the new state.
    pub fn update(&mut self, lead: Option<&Leader>, dt: f32) {
        (self.position, self.speed) = integrate(self.position, self.speed, self.acceleration, dt);

        self.acceleration = self.idm.acceleration(self.position, self.speed, lead);
        self.apply_stop_override();
    }

    /// Temporarily cap the free-road speed, e.g. inside a slow zone.
    pub fn slow(&mut self, max_speed: f32) -> Result<(), ConfigError> {
        if !max_speed.is_finite() {
            return Err(ConfigError::NonFinite {
                key: "max_speed",
                value: max_speed,
            });
        }
        if max_speed <= 0.0 {
            return Err(ConfigError::NonPositive {
                key: "max_speed",
                value: max_speed,
            });
        }

        self.idm.max_speed = max_speed;
        Ok(())
    }

    pub fn unslow(&mut self) {
        self.idm.max_speed = self.configured_max_speed;
    }

    pub fn current_segment(&self) -> Option<Id<Segment>> {
        self.path.get(self.current_road_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Road;
    use glam::Vec3;

    fn vehicle() -> Vehicle {
        Vehicle::new(&mut IdAllocator::new(), VehicleConfig::default()).unwrap()
    }

    #[test]
    fn ids_come_from_the_allocator() {
        let mut ids = IdAllocator::starting_at(41);
        let a = Vehicle::new(&mut ids, VehicleConfig::default()).unwrap();
        let b = Vehicle::new(&mut ids, VehicleConfig::default()).unwrap();

        assert_eq!(a.id.id, 41);
        assert_eq!(b.id.id, 42);
    }

    #[test]
    fn invalid_config_is_rejected_before_allocating() {
        let mut ids = IdAllocator::new();
        let config = VehicleConfig {
            max_acceleration: 0.0,
            ..Default::default()
        };

        assert!(Vehicle::new(&mut ids, config).is_err());
        assert_eq!(ids.peek().id, 0);
    }

    #[test]
    fn first_tick_from_rest() {
        let mut vehicle = vehicle();
        vehicle.update(None, 1.0);

        assert_eq!(vehicle.position, 0.0);
        assert_eq!(vehicle.speed, 0.0);
        assert_eq!(vehicle.acceleration, 1.44);
    }

    #[test]
    fn acceleration_lags_one_tick() {
        let mut vehicle = vehicle();
        vehicle.update(None, 1.0);
        vehicle.update(None, 1.0);

        assert!((vehicle.speed - 1.44).abs() < 1e-6);
        assert!((vehicle.position - 0.72).abs() < 1e-6);
        assert!(vehicle.acceleration < 1.44);
    }

    #[test]
    fn moderate_braking_uses_start_speed_for_position() {
        let mut vehicle = vehicle();
        vehicle.speed = 10.0;
        vehicle.acceleration = -5.0;
        vehicle.update(None, 1.0);

        assert_eq!(vehicle.speed, 5.0);
        assert_eq!(vehicle.position, 7.5);
    }

    #[test]
    fn overbraking_stops_inside_the_step() {
        let mut vehicle = vehicle();
        vehicle.speed = 2.0;
        vehicle.acceleration = -5.0;
        vehicle.update(None, 1.0);

        assert_eq!(vehicle.speed, 0.0);
        assert!((vehicle.position - 0.4).abs() < 1e-6);
    }

    #[test]
    fn changing_parameters_keeps_sqrt_ab_in_sync() {
        let mut vehicle = vehicle();
        vehicle.idm.max_acceleration = 4.0;
        vehicle.idm.comfortable_deceleration = 1.0;

        assert_eq!(vehicle.idm.sqrt_ab(), 4.0);
    }

    #[test]
    fn slow_zone_caps_speed_then_restores() {
        let mut vehicle = vehicle();
        vehicle.slow(5.0).unwrap();
        vehicle.speed = 5.0;
        vehicle.update(None, 0.0);
        assert!(vehicle.acceleration.abs() < 1e-6);

        vehicle.unslow();
        assert_eq!(vehicle.idm.max_speed, 16.6);
        vehicle.update(None, 0.0);
        assert!(vehicle.acceleration > 1.0);
    }

    #[test]
    fn slow_rejects_non_positive_cap() {
        let mut vehicle = vehicle();
        assert!(vehicle.slow(0.0).is_err());
        assert!(vehicle.slow(f32::INFINITY).is_err());
        assert_eq!(vehicle.idm.max_speed, 16.6);
    }

    #[test]
    fn current_segment_follows_road_index() {
        let mut road = Road::default();
        let first = road.add_segment(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0));
        let second = road.add_segment(Vec3::new(100.0, 0.0, 0.0), Vec3::new(100.0, 50.0, 0.0));

        let mut vehicle = vehicle().with_path(vec![first, second]);
        assert_eq!(vehicle.current_segment(), Some(first));

        vehicle.current_road_index = 1;
        assert_eq!(vehicle.current_segment(), Some(second));

        vehicle.current_road_index = 2;
        assert_eq!(vehicle.current_segment(), None);
    }

    #[test]
    fn update_leaves_path_alone() {
        let mut road = Road::default();
        let only = road.add_segment(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));

        let mut vehicle = vehicle().with_path(vec![only]);
        vehicle.speed = 15.0;
        for _ in 0..10 {
            vehicle.update(None, 1.0);
        }

        assert!(vehicle.position > 10.0);
        assert_eq!(vehicle.path, vec![only]);
        assert_eq!(vehicle.current_road_index, 0);
    }
}
