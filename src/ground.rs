use bevy::{prelude::*, sprite::ImageScaleMode};
use tank_assets::prelude::*;

use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

pub struct GroundPlugin;

impl Plugin for GroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AssetLoadingState::Finished), spawn);
    }
}

/// World units covered by one repetition of the ground texture.
const GROUND_SIZE: f32 = 600.0;

fn spawn(mut commands: Commands, assets: Res<GameAssets>, images: Res<Assets<Image>>) {
    let Some(image) = images.get(&assets.ground_texture) else {
        return;
    };

    let stretch_value = GROUND_SIZE / image.size_f32().x.max(1.0);

    commands.spawn((
        Name::new("ground"),
        SpriteBundle {
            sprite: Sprite {
                custom_size: Some(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
                ..default()
            },
            texture: assets.ground_texture.clone(),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..default()
        },
        ImageScaleMode::Tiled {
            tile_x: true,
            tile_y: true,
            stretch_value,
        },
    ));
}
