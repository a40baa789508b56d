//! Integration tests for azp-bump.toml handling and option validation

use azp_bump::config::{
    BumpOptions, Config, IndentValue, RawOptions, validate_json_indent, validate_options,
};
use azp_bump::{ConfigError, IndentSpec, ReleaseType, VersionPropertyType};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_options_file() {
    let config = Config::parse(
        r#"
[bump]
type = "minor"
indent = "tab"
version-property-type = "string"
quiet = true
"#,
    )
    .unwrap();

    let options = validate_options(Some(&config.bump));
    assert_eq!(
        options,
        BumpOptions {
            release_type: ReleaseType::Minor,
            indent: IndentSpec::Tab,
            version_property_type: VersionPropertyType::String,
            quiet: true,
        }
    );
}

#[test]
fn test_numeric_indent_in_file() {
    let config = Config::parse("[bump]\nindent = 4\n").unwrap();
    assert_eq!(config.bump.indent, Some(IndentValue::Number(4.0)));
    assert_eq!(validate_options(Some(&config.bump)).indent, IndentSpec::Spaces(4));
}

#[test]
fn test_empty_file_is_default() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.bump, RawOptions::default());
    assert_eq!(validate_options(Some(&config.bump)), BumpOptions::default());
}

#[test]
fn test_invalid_syntax() {
    let err = Config::parse("[bump\ntype = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid configuration syntax"));
}

#[test]
fn test_discover_and_load() {
    let temp = TempDir::new().unwrap();
    assert_eq!(Config::discover(temp.path()).unwrap(), Config::default());

    fs::write(temp.path().join("azp-bump.toml"), "[bump]\ntype = \"major\"\n").unwrap();
    let config = Config::discover(temp.path()).unwrap();
    assert_eq!(config.bump.release_type.as_deref(), Some("major"));

    let loaded = Config::load(Config::default_path(temp.path())).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_indent_bounds() {
    let cases = [
        (IndentValue::Number(0.0), IndentSpec::Spaces(2)),
        (IndentValue::Number(1.0), IndentSpec::Spaces(1)),
        (IndentValue::Number(3.7), IndentSpec::Spaces(3)),
        (IndentValue::Number(10.0), IndentSpec::Spaces(10)),
        (IndentValue::Number(10.5), IndentSpec::Spaces(2)),
        (IndentValue::Number(f64::NAN), IndentSpec::Spaces(2)),
        (IndentValue::Text("4".to_string()), IndentSpec::Spaces(2)),
        (IndentValue::Text("t".to_string()), IndentSpec::Tab),
        (IndentValue::Text("\t".to_string()), IndentSpec::Tab),
        (IndentValue::Text("TAB".to_string()), IndentSpec::Spaces(2)),
    ];

    for (value, expected) in cases {
        assert_eq!(validate_json_indent(Some(&value)), expected, "{:?}", value);
    }
    assert_eq!(validate_json_indent(None), IndentSpec::Spaces(2));
}

#[test]
fn test_merge_prefers_later_values() {
    let file = RawOptions {
        release_type: Some("major".to_string()),
        indent: Some(IndentValue::Number(8.0)),
        version_property_type: Some("string".to_string()),
        quiet: Some(false),
    };
    let flags = RawOptions {
        indent: Some(IndentValue::Text("tab".to_string())),
        quiet: Some(true),
        ..RawOptions::default()
    };

    let merged = file.merge(flags);
    assert_eq!(merged.release_type.as_deref(), Some("major"));
    assert_eq!(merged.indent, Some(IndentValue::Text("tab".to_string())));
    assert_eq!(merged.version_property_type.as_deref(), Some("string"));
    assert_eq!(merged.quiet, Some(true));
}
