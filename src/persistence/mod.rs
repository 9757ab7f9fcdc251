pub mod config;
pub mod files;

pub use config::{load_config, save_config, TimerConfig};
pub use files::{atomic_write, config_file, log_dir, read_file};
