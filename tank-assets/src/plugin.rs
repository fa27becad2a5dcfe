use bevy::{
    asset::{LoadState, UntypedAssetId},
    prelude::*,
};

use crate::configs::{TankConfig, TankConfigLoader};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, States)]
pub enum AssetLoadingState {
    #[default]
    LoadAssets,
    Finished,
}

pub struct GameAssetsPlugin;

impl Plugin for GameAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AssetLoadingState>();
        app.init_asset::<TankConfig>();
        app.init_asset_loader::<TankConfigLoader>();
        app.add_systems(OnEnter(AssetLoadingState::LoadAssets), (start_loading,));
        app.add_systems(
            Update,
            check_assets.run_if(in_state(AssetLoadingState::LoadAssets)),
        );
    }
}

#[derive(Default, Resource)]
pub struct GameAssets {
    pub tank_texture: Handle<Image>,
    pub ground_texture: Handle<Image>,
    pub tank_config: Handle<TankConfig>,
}

/// Everything needed to build the tank. Only inserted once the tank texture is loaded, so its
/// size is known.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct LoadedTank {
    pub config: TankConfig,
    pub texture_size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    Pending,
    Loaded,
    Failed,
}

fn progress(asset_server: &AssetServer, id: impl Into<UntypedAssetId>) -> Progress {
    match asset_server.load_state(id) {
        LoadState::Loaded => Progress::Loaded,
        LoadState::Failed(_) => Progress::Failed,
        _ => Progress::Pending,
    }
}

/// Loading is over once nothing is pending, whether it succeeded or not.
fn loading_finished(states: &[Progress]) -> bool {
    !states.contains(&Progress::Pending)
}

/// A missing config falls back to the defaults, a missing texture leaves nothing to build.
fn resolve_tank(config: Option<TankConfig>, texture_size: Option<Vec2>) -> Option<LoadedTank> {
    texture_size.map(|texture_size| LoadedTank {
        config: config.unwrap_or_default(),
        texture_size,
    })
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("Loading game assets");

    let game_assets = GameAssets {
        tank_texture: asset_server.load("textures/tank.png"),
        ground_texture: asset_server.load("textures/ground.png"),
        tank_config: asset_server.load("configs/tank.json"),
    };

    commands.insert_resource(game_assets);
}

fn check_assets(
    mut commands: Commands,
    mut next_state: ResMut<NextState<AssetLoadingState>>,
    asset_server: Res<AssetServer>,
    game_assets: Res<GameAssets>,
    images: Res<Assets<Image>>,
    configs: Res<Assets<TankConfig>>,
) {
    let tank = progress(&asset_server, &game_assets.tank_texture);
    let ground = progress(&asset_server, &game_assets.ground_texture);
    let config = progress(&asset_server, &game_assets.tank_config);

    if !loading_finished(&[tank, ground, config]) {
        return;
    }

    if ground == Progress::Failed {
        warn!("Could not load the ground texture, drawing without it");
    }

    let config = configs.get(&game_assets.tank_config).copied();
    if config.is_none() {
        error!("Could not load the tank config, falling back to defaults");
    }

    let texture_size = images.get(&game_assets.tank_texture).map(Image::size_f32);

    match resolve_tank(config, texture_size) {
        Some(loaded) => {
            let size = loaded.texture_size;
            info!("Tank texture is {}x{}", size.x, size.y);
            commands.insert_resource(loaded);
        }
        None => error!("Could not load the tank texture, there is nothing to drive"),
    }

    info!("Finished loading");
    next_state.set(AssetLoadingState::Finished);
}
