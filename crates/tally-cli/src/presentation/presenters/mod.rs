mod config;
mod progress;
mod value;

pub use config::{present_config, present_config_init, present_config_path};
pub use progress::present_progress;
pub use value::present_value;
