use bevy::{diagnostic::FrameTimeDiagnosticsPlugin, prelude::*};
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};
use movement::plugin::SteeringPlugin;
use tank_assets::plugin::GameAssetsPlugin;

mod debug;
mod ground;
mod input;
mod path;
mod tank;
mod ui;

#[cfg(debug_assertions)]
use debug::DebugPlugin;
use ground::GroundPlugin;
use input::InputPlugin;
use path::PathPlugin;
use tank::TankPlugin;
use ui::UiPlugin;

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Simulation ticks per second.
pub const TICK_RATE: f64 = 30.0;
pub const FIXED_TIMESTEP: f64 = 1.0 / TICK_RATE;
pub const RENDER_FRAMERATE: f64 = 60.0;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Path Drawing".into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }),
    )
    .add_plugins(FrameTimeDiagnosticsPlugin)
    .add_plugins(FramepacePlugin)
    .add_plugins(GameAssetsPlugin)
    .add_plugins(SteeringPlugin)
    .add_plugins(TankPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(GroundPlugin)
    .add_plugins(PathPlugin)
    .add_plugins(UiPlugin)
    .add_systems(Startup, (spawn_camera, setup_framepace))
    .insert_resource(Time::<Fixed>::from_seconds(FIXED_TIMESTEP));

    #[cfg(debug_assertions)]
    app.add_plugins(DebugPlugin);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn setup_framepace(mut settings: ResMut<FramepaceSettings>) {
    settings.limiter = Limiter::from_framerate(RENDER_FRAMERATE);
}
