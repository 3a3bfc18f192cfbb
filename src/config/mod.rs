pub mod config_load;

pub use config_load::{Config, DemoConfig, PathConfig, SpriteConfig, WindowConfig};
