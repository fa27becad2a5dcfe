use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_instructions);
    }
}

const INSTRUCTIONS: &str = "Drag a path from the tank to have it drive around.";

fn spawn_instructions(mut commands: Commands) {
    commands.spawn((
        Name::new("instructions"),
        TextBundle::from_section(
            INSTRUCTIONS,
            TextStyle {
                font_size: 24.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            left: Val::Px(5.0),
            ..default()
        }),
    ));
}
