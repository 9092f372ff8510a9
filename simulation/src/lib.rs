//! Longitudinal car-following for road vehicles.
//!
//! Each [`driver::Vehicle`] advances once per tick: position and speed move with the
//! acceleration chosen on the previous tick, then a new acceleration is picked from the
//! Intelligent Driver Model, then a pending stop command may override it.

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;

mod arena;
pub mod driver;
mod error;
pub mod prelude;
mod road;

pub use arena::*;
pub use error::*;
pub use road::*;

use crate::driver::{advance_vehicles, update_occupancy, SegmentOccupancy};

pub struct CarFollowingPlugin;

impl Plugin for CarFollowingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SegmentOccupancy>();

        app.add_systems(Update, (update_occupancy, advance_vehicles).chain());
    }
}
