pub use crate::driver::{Idm, Leader, SegmentOccupancy, Vehicle, VehicleConfig};
pub use crate::{CarFollowingPlugin, ConfigError, Id, IdAllocator, Road, Segment};
