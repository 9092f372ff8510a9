mod config;
pub use config::*;

mod idm;
pub use idm::*;

mod kinematics;
pub use kinematics::*;

mod stop;

mod vehicle;
pub use vehicle::*;

mod occupancy;
pub use occupancy::*;

mod movement;
pub use movement::*;
