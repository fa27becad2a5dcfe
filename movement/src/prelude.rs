pub use crate::paths::WaypointQueue;
pub use crate::plugin::SteeringPlugin;
pub use crate::tank::{Footprint, TankParams, TargetHeading, Tank, TickOutcome};
