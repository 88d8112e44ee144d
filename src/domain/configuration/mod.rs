pub mod build_config;
pub mod loader;

pub use build_config::{BuildConfig, ProjectConfig, RelocationConfig};
pub use loader::{CONFIG_FILE, load_config, parse_config_content};
