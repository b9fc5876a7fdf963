mod defaults;
mod loader;
mod types;
mod validation;

pub use loader::{load_config, CONFIG_FILES};
pub use types::*;
