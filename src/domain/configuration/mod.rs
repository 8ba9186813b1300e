pub mod api_config;
pub mod loader;

pub use api_config::{ApiConfig, AppConfig};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
