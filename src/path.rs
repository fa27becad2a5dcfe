use bevy::prelude::*;
use movement::tank::Tank;

pub struct PathPlugin;

impl Plugin for PathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_gizmos)
            .add_systems(Update, draw_path);
    }
}

const PATH_WIDTH: f32 = 3.0;

/// The tank's location followed by every waypoint, in driving order.
pub fn path_points(tank: &Tank) -> Vec<Vec2> {
    std::iter::once(tank.location())
        .chain(tank.waypoints().iter())
        .collect()
}

fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = PATH_WIDTH;
}

fn draw_path(mut gizmos: Gizmos, tanks: Query<&Tank>) {
    for tank in &tanks {
        if tank.waypoints().is_empty() {
            continue;
        }

        gizmos.linestrip_2d(path_points(tank), Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movement::tank::{Footprint, TankParams};

    #[test]
    fn path_starts_at_the_tank() {
        let mut tank = Tank::new(Vec2::new(1.0, 2.0), Footprint::new(16.0), TankParams::default());
        assert_eq!(path_points(&tank), vec![Vec2::new(1.0, 2.0)]);

        tank.waypoints_mut()
            .extend([Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)]);

        assert_eq!(
            path_points(&tank),
            vec![
                Vec2::new(1.0, 2.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(20.0, 20.0)
            ]
        );
    }
}
