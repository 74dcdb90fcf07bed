pub mod config;

pub use config::{Config, ConfigBuilder, ConfigError, Kind, Map, NullableConfig, Validity, Value};
