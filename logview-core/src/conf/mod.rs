mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{MAX_CYCLES_PER_UPDATE, load_config, load_or_default, validate};
pub use types::{DisplayConfig, ViewerConfig};
