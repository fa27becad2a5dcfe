use bevy::prelude::*;
use movement::prelude::*;
use tank_assets::prelude::*;

pub struct TankPlugin;

impl Plugin for TankPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AssetLoadingState::Finished), spawn);
    }
}

const TANK_Z: f32 = 1.0;

/// Builds the simulated tank from its loaded config and texture size.
pub fn build_tank(loaded: &LoadedTank) -> Tank {
    let config = &loaded.config;
    let params = TankParams {
        arrival_tolerance: config.arrival_tolerance,
        angular_tolerance: config.angular_tolerance,
        max_angular_velocity: config.max_angular_velocity,
        hit_scale: config.hit_scale,
    };

    let mut tank = Tank::new(
        config.start_position(),
        Footprint::from_size(loaded.texture_size),
        params,
    );
    tank.set_move_speed(config.move_speed);

    tank
}

fn spawn(mut commands: Commands, loaded: Option<Res<LoadedTank>>, assets: Res<GameAssets>) {
    let Some(loaded) = loaded else {
        return;
    };

    let tank = build_tank(&loaded);
    info!(
        "Spawning tank at {} with speed {}",
        tank.location(),
        tank.move_speed()
    );

    commands.spawn((
        Name::new("tank"),
        SpriteBundle {
            texture: assets.tank_texture.clone(),
            transform: Transform::from_translation(tank.location().extend(TANK_Z)),
            ..default()
        },
        tank,
    ));
}
