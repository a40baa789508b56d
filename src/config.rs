//! Option validation and options-file parsing

pub mod bump_toml;
pub mod options;

pub use bump_toml::{Config, DEFAULT_CONFIG_FILE};
pub use options::{
    BumpOptions, IndentValue, RawOptions, validate_json_indent, validate_options,
    validate_release_type, validate_version_property_type,
};
