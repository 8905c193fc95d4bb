mod settings;

pub use settings::{ApiConfig, LogFormat, LoggingConfig, ServerConfig, Settings};
