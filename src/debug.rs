#![cfg(debug_assertions)]
use bevy::color::palettes::css::{LIME, RED};
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use movement::prelude::*;

pub struct DebugPlugin;

#[derive(Default, Resource)]
pub struct DebugSettings {
    pub hit_area_draw_enabled: bool,
}

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<WaypointQueue>();
        app.register_type::<TargetHeading>();
        app.add_plugins(WorldInspectorPlugin::new());
        app.add_systems(Update, exit_on_esc);

        app.add_systems(Startup, (add_fps_text,));
        app.add_systems(FixedUpdate, update_fps);
        app.add_systems(Update, (handle_input, debug_draw));

        app.insert_resource(DebugSettings::default());
    }
}

fn exit_on_esc(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

fn handle_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut debug_settings: ResMut<DebugSettings>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyG) {
        debug_settings.hit_area_draw_enabled = !debug_settings.hit_area_draw_enabled;
    }
}

/// Draws the circle the pointer has to land in to start a path, and the arrival radius
/// around the current destination.
fn debug_draw(debug_settings: Res<DebugSettings>, tanks: Query<&Tank>, mut gizmos: Gizmos) {
    if !debug_settings.hit_area_draw_enabled {
        return;
    }

    for tank in &tanks {
        let params = tank.params();
        let hit_radius = tank.footprint().bounding_radius * params.hit_scale.sqrt();
        gizmos.circle_2d(tank.location(), hit_radius, RED);

        if let Some(destination) = tank.waypoints().peek() {
            gizmos.circle_2d(destination, params.arrival_tolerance, LIME);
        }
    }
}

#[derive(Component)]
struct FpsText;

fn add_fps_text(mut commands: Commands) {
    let style = TextStyle {
        font_size: 16.0,
        color: Color::WHITE,
        ..default()
    };

    commands.spawn((
        TextBundle::from_section(fps_label(None), style).with_style(Style {
            position_type: PositionType::Absolute,
            bottom: Val::Px(4.0),
            right: Val::Px(8.0),
            ..default()
        }),
        FpsText,
    ));
}

fn fps_label(fps: Option<f64>) -> String {
    match fps {
        Some(fps) => format!("{fps:.0} fps"),
        None => "-- fps".to_string(),
    }
}

fn update_fps(diagnostics: Res<DiagnosticsStore>, mut fps_text: Query<&mut Text, With<FpsText>>) {
    let Ok(mut text) = fps_text.get_single_mut() else {
        return;
    };

    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    text.sections[0].value = fps_label(fps);
}
