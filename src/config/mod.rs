//! Typed, dot-path access to configuration trees.

mod builder;
mod error;
mod flatten;
mod nullable;
mod path;
mod resolve;
mod validate;
mod value;
mod view;

pub use builder::ConfigBuilder;
pub use error::ConfigError;
pub use flatten::{flatten, unflatten};
pub use nullable::NullableConfig;
pub use path::{Path, DELIMITER};
pub use resolve::resolve;
pub use validate::{validate, Validity};
pub use value::{map_from_toml, Kind, Map, Value};
pub use view::Config;
