use crate::{
    driver::{Leader, Vehicle},
    Id, Segment,
};
use bevy_ecs::prelude::*;
use std::collections::HashMap;

/// Snapshot of one vehicle on a segment, taken before anyone moves this frame.
#[derive(Debug, Clone, Copy)]
pub struct Occupant {
    pub vehicle: Entity,
    pub position: f32,
    pub speed: f32,
    pub length: f32,
}

impl From<&Occupant> for Leader {
    fn from(occupant: &Occupant) -> Self {
        Self {
            position: occupant.position,
            speed: occupant.speed,
            length: occupant.length,
        }
    }
}

#[derive(Resource, Default)]
pub struct SegmentOccupancy {
    /// Occupants per segment, sorted by position.
    pub vehicles: HashMap<Id<Segment>, Vec<Occupant>>,
}

impl SegmentOccupancy {
    /// The nearest vehicle strictly ahead of `vehicle` on its current segment.
    ///
    /// Vehicles at exactly the same position are not each other's leader.
    pub fn find_leader(&self, entity: Entity, vehicle: &Vehicle) -> Option<Leader> {
        let occupants = self.vehicles.get(&vehicle.current_segment()?)?;

        occupants
            .iter()
            .find(|occ| occ.position > vehicle.position && occ.vehicle != entity)
            .map(Leader::from)
    }
}

pub fn update_occupancy(
    mut occupancy: ResMut<SegmentOccupancy>,
    vehicles: Query<(Entity, &Vehicle)>,
) {
    occupancy.vehicles.clear();

    for (entity, vehicle) in &vehicles {
        let Some(segment) = vehicle.current_segment() else {
            continue;
        };

        occupancy.vehicles.entry(segment).or_default().push(Occupant {
            vehicle: entity,
            position: vehicle.position,
            speed: vehicle.speed,
            length: vehicle.length,
        });
    }

    for occupants in occupancy.vehicles.values_mut() {
        occupants.sort_by(|a, b| a.position.total_cmp(&b.position));
    }
}
