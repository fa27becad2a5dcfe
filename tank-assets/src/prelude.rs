pub use crate::configs::{InvalidConfig, TankConfig, TankConfigLoader, TankConfigLoaderError};
pub use crate::plugin::{AssetLoadingState, GameAssets, GameAssetsPlugin, LoadedTank};
