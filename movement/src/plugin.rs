use bevy::prelude::*;

use crate::tank::{Tank, TickOutcome};

pub struct SteeringPlugin;

impl Plugin for SteeringPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Tank>();
        app.add_systems(FixedUpdate, (tick_tanks, update_translation).chain());
    }
}

/// Runs one simulation step for every tank. Scheduled in `FixedUpdate`, so `Time` is the
/// fixed clock here.
pub fn tick_tanks(time: Res<Time>, mut tanks: Query<&mut Tank>) {
    let elapsed = time.delta_seconds();

    for mut tank in &mut tanks {
        if tank.waypoints().is_empty() {
            continue;
        }

        match tank.update(elapsed) {
            TickOutcome::Arrived { remaining: 0 } => {
                info!("Tank reached the end of its path at {}", tank.location());
            }
            TickOutcome::Arrived { remaining } => {
                debug!("Waypoint reached, {} left", remaining);
            }
            TickOutcome::Moving { .. } | TickOutcome::Idle => {}
        }
    }
}

/// Mirrors the simulated location and heading onto the tank's `Transform`.
pub fn update_translation(mut tanks: Query<(&mut Transform, &Tank)>) {
    for (mut transform, tank) in &mut tanks {
        transform.translation = tank.location().extend(transform.translation.z);
        transform.rotation = Quat::from_rotation_z(tank.heading());
    }
}
