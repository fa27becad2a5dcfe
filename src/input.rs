use bevy::{prelude::*, window::PrimaryWindow};
use movement::tank::Tank;
use tank_assets::plugin::AssetLoadingState;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PathGesture::default());
        app.add_systems(
            Update,
            handle_mouse.run_if(in_state(AssetLoadingState::Finished)),
        );
    }
}

/// Tracks a path-drawing drag that started on the tank.
#[derive(Resource, Debug, Default)]
pub struct PathGesture {
    drawing: bool,
}

impl PathGesture {
    /// Starts a new path at `point` if it hits the tank. Returns whether it did.
    pub fn press(&mut self, tank: &mut Tank, point: Vec2) -> bool {
        if !tank.hit_test(point) {
            return false;
        }

        tank.begin_path(point);
        self.drawing = true;

        true
    }

    /// Appends `point` to the path while a drag is in progress.
    pub fn drag(&self, tank: &mut Tank, point: Vec2) {
        if self.drawing {
            tank.waypoints_mut().enqueue(point);
        }
    }

    pub fn release(&mut self) {
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

fn handle_mouse(
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut gesture: ResMut<PathGesture>,
    mut tanks: Query<&mut Tank>,
) {
    let (Ok((camera, camera_transform)), Ok(mut tank)) = (camera.get_single(), tanks.get_single_mut())
    else {
        cursor_moved.clear();
        return;
    };

    let to_world = |position: Vec2| camera.viewport_to_world_2d(camera_transform, position);

    if buttons.just_pressed(MouseButton::Left) {
        let cursor = windows
            .get_single()
            .ok()
            .and_then(|window| window.cursor_position())
            .and_then(to_world);

        if let Some(point) = cursor {
            if gesture.press(&mut tank, point) {
                debug!("Started a new path at {}", point);
            }
        }
    }

    for event in cursor_moved.read() {
        if let Some(point) = to_world(event.position) {
            gesture.drag(&mut tank, point);
        }
    }

    if buttons.just_released(MouseButton::Left) && gesture.is_drawing() {
        gesture.release();
        info!("Path drawn with {} waypoints", tank.waypoints().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movement::tank::{Footprint, TankParams};

    fn tank() -> Tank {
        let mut tank = Tank::new(Vec2::new(50.0, 50.0), Footprint::new(16.0), TankParams::default());
        tank.waypoints_mut().enqueue(Vec2::new(300.0, 300.0));
        tank
    }

    #[test]
    fn press_off_the_tank_keeps_the_old_path() {
        let mut tank = tank();
        let mut gesture = PathGesture::default();

        assert!(!gesture.press(&mut tank, Vec2::new(200.0, 50.0)));
        gesture.drag(&mut tank, Vec2::new(210.0, 50.0));

        assert!(!gesture.is_drawing());
        assert_eq!(tank.waypoints().len(), 1);
        assert_eq!(tank.waypoints().peek(), Some(Vec2::new(300.0, 300.0)));
    }

    #[test]
    fn press_on_the_tank_starts_a_new_path() {
        let mut tank = tank();
        let mut gesture = PathGesture::default();

        assert!(gesture.press(&mut tank, Vec2::new(55.0, 50.0)));

        assert!(gesture.is_drawing());
        assert_eq!(tank.waypoints().len(), 1);
        assert_eq!(tank.waypoints().peek(), Some(Vec2::new(55.0, 50.0)));
    }

    #[test]
    fn drag_appends_until_released() {
        let mut tank = tank();
        let mut gesture = PathGesture::default();

        gesture.press(&mut tank, Vec2::new(50.0, 50.0));
        gesture.drag(&mut tank, Vec2::new(60.0, 50.0));
        gesture.drag(&mut tank, Vec2::new(70.0, 55.0));
        gesture.release();
        gesture.drag(&mut tank, Vec2::new(80.0, 60.0));

        let points: Vec<_> = tank.waypoints().iter().collect();
        assert_eq!(
            points,
            vec![
                Vec2::new(50.0, 50.0),
                Vec2::new(60.0, 50.0),
                Vec2::new(70.0, 55.0)
            ]
        );
    }
}
