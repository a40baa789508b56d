//! Common helper functions shared by the CLI
//!
//! Logging setup and options file loading live here so the command body
//! only deals with the bump itself.

use crate::config::bump_toml::Config;
use crate::config::options::RawOptions;
use crate::error::ConfigError;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Installs the stderr tracing subscriber
///
/// `verbose` enables debug events. Otherwise `RUST_LOG` is honored, falling
/// back to warnings only. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Loads the options file
///
/// An explicit path must exist. Without one, `azp-bump.toml` in `cwd` is
/// used when present.
pub(crate) fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading options file");
            Config::load(path)
        }
        None => Config::discover(cwd),
    }
}

/// Layers command-line options over the options file
pub(crate) fn merge_options(config: Config, cli: RawOptions) -> RawOptions {
    config.bump.merge(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::IndentValue;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_missing_default_is_empty() {
        let temp = TempDir::new().unwrap();
        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_explicit_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let result = load_config(Some(&missing), temp.path());
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_discovers_default_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("azp-bump.toml"),
            "[bump]\ntype = \"major\"\n",
        )
        .unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config.bump.release_type.as_deref(), Some("major"));
    }

    #[test]
    fn test_merge_options_cli_wins() {
        let config = Config {
            bump: RawOptions {
                release_type: Some("major".to_string()),
                indent: Some(IndentValue::Number(4.0)),
                version_property_type: None,
                quiet: Some(true),
            },
        };
        let cli = RawOptions {
            release_type: Some("minor".to_string()),
            ..RawOptions::default()
        };

        let merged = merge_options(config, cli);
        assert_eq!(merged.release_type.as_deref(), Some("minor"));
        assert_eq!(merged.indent, Some(IndentValue::Number(4.0)));
        assert_eq!(merged.quiet, Some(true));
    }
}
