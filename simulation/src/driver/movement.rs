use bevy_ecs::prelude::*;
use bevy_log::{debug, warn};
use bevy_time::Time;

use crate::driver::{SegmentOccupancy, Vehicle};

/// Advance every vehicle by one frame.
///
/// Leaders are read from the [`SegmentOccupancy`] snapshot, so every follower sees its
/// leader as it was at the start of the frame regardless of query order.
pub fn advance_vehicles(
    time: Res<Time>,
    occupancy: Res<SegmentOccupancy>,
    mut vehicles: Query<(Entity, &mut Vehicle)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (entity, mut vehicle) in &mut vehicles {
        let lead = occupancy.find_leader(entity, &vehicle);

        if let Some(lead) = &lead {
            let gap = lead.gap_from(vehicle.position);
            if gap <= 0.0 {
                warn!(
                    "vehicle {} overlaps its leader (gap {gap:.2} m); car-following output is meaningless",
                    vehicle.id
                );
            }
        }

        let was_moving = vehicle.speed > 0.0;
        vehicle.update(lead.as_ref(), dt);

        if was_moving && vehicle.speed == 0.0 {
            debug!("vehicle {} came to rest at {:.2} m", vehicle.id, vehicle.position);
        }
    }
}
