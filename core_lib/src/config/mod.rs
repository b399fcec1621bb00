pub mod settings;

pub use settings::{AppConfig, CorsConfig, SeedConfig, ServerConfig};
