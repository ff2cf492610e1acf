mod loader;
mod model;

pub use loader::{
    ConfigLoader, DEFAULT_CONFIG_NAME, FileConfigLoader, FileSystem, RealFileSystem,
    resolve_config,
};
pub use model::{CheckConfig, CheckMapItem, CheckMapItemConfig, ConfigFile};
