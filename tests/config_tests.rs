use std::io::Write;
use tempfile::NamedTempFile;

use ago::lang::Language;
use ago::time::{Ago, PhraseFlags};
use ago::util::config::AgoConfig;

fn write_config(toml: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();
    f
}

#[test]
fn test_load_full_config() {
    let f = write_config(
        r#"
[locale]
language = "ru"

[phrase]
no_suffix = true
online = true
"#,
    );

    let config = AgoConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.locale.language, "ru");
    assert_eq!(config.language(), Language::Russian);
    assert!(config.phrase.no_suffix);
    assert!(config.phrase.online);
    assert_eq!(config.flags(), PhraseFlags::NO_SUFFIX | PhraseFlags::ONLINE);
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let f = write_config(
        r#"
[phrase]
no_suffix = true
"#,
    );

    let config = AgoConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.language(), Language::English);
    assert_eq!(config.flags(), PhraseFlags::NO_SUFFIX);
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let f = write_config("");

    let config = AgoConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.locale.language, "en");
    assert!(config.flags().is_empty());
}

#[test]
fn test_unknown_language_falls_back() {
    let f = write_config(
        r#"
[locale]
language = "klingon"
"#,
    );

    let config = AgoConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.language(), Language::English);
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AgoConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let f = write_config("this is not [valid toml {{");

    let result = AgoConfig::load(Some(f.path()));
    assert!(result.is_err());
}

#[test]
fn test_context_from_config() {
    let f = write_config(
        r#"
[locale]
language = "ru"

[phrase]
no_suffix = true
"#,
    );

    let config = AgoConfig::load(Some(f.path())).unwrap();
    let ctx = Ago::from_config(&config);
    assert_eq!(ctx.format(5 * 31536000).unwrap(), "5 лет");
}

#[test]
fn test_default_config() {
    let config = AgoConfig::default();
    assert_eq!(config.locale.language, "en");
    assert!(!config.phrase.no_suffix);
    assert!(!config.phrase.online);
    assert_eq!(Ago::from_config(&config), Ago::default());
}
