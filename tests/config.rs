//! Tests for TOML config loading and logger construction from config.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use zlog::{Config, Error, ErrorPolicy, FileMode, Flags, Level, Logger};

#[test]
fn empty_config_uses_defaults() {
    let config: Config = "".parse().unwrap();
    assert_eq!(config.general.name, "zlog");
    assert_eq!(config.parse_level(), Level::Info);
    assert_eq!(config.general.pattern, zlog::fmt::DEFAULT_PATTERN);
    assert_eq!(config.parse_policy(), ErrorPolicy::Exit);
    assert_eq!(config.flags(), Flags::ALL);
    assert_eq!(config.parse_file_mode(), FileMode::Append);
    assert_eq!(config.file_path(), None);
}

#[test]
fn full_config_is_parsed() {
    let config: Config = r#"
        [general]
        name = "svc"
        level = "warning"
        pattern = "{n} {t} > "
        on_error = "report"

        [flags]
        debug = false
        colors = true

        [file]
        mode = "w"
        path = "/var/log/svc.log"
    "#
    .parse()
    .unwrap();

    assert_eq!(config.general.name, "svc");
    assert_eq!(config.parse_level(), Level::Warning);
    assert_eq!(config.parse_policy(), ErrorPolicy::Report);
    assert_eq!(config.flags(), Flags::USE_COLORS);
    assert_eq!(config.parse_file_mode(), FileMode::Truncate);
    assert_eq!(config.file_path(), Some(PathBuf::from("/var/log/svc.log")));
}

#[test]
fn unknown_values_fall_back() {
    let config: Config = r#"
        [general]
        level = "loud"
        on_error = "ignore"

        [file]
        mode = "rw"
    "#
    .parse()
    .unwrap();

    assert_eq!(config.parse_level(), Level::Info);
    assert_eq!(config.parse_policy(), ErrorPolicy::Exit);
    assert_eq!(config.parse_file_mode(), FileMode::Append);
}

#[test]
fn strict_parsers_report_bad_values() {
    let config: Config = "[general]\nlevel = \"loud\"\n[file]\nmode = \"rw\"\n"
        .parse()
        .unwrap();

    assert!(matches!(config.try_level(), Err(Error::InvalidLevel(s)) if s == "loud"));
    assert!(matches!(config.try_file_mode(), Err(Error::InvalidFileMode(s)) if s == "rw"));
}

#[test]
fn strict_parsers_accept_good_values() {
    let config: Config = "[general]\nlevel = \"trace\"\n[file]\nmode = \"w\"\n"
        .parse()
        .unwrap();

    assert_eq!(config.try_level().unwrap(), Level::Trace);
    assert_eq!(config.try_file_mode().unwrap(), FileMode::Truncate);
}

#[test]
fn invalid_toml_is_an_error() {
    let err = "[general\nname = 1".parse::<Config>().unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("zlog.toml");
    fs::write(&path, "[general]\nname = \"fromfile\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.general.name, "fromfile");
}

#[test]
fn load_from_missing_file_is_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    let err = Config::load_from(&tmp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn config_path_ends_with_app_dir() {
    if let Ok(path) = Config::get_config_path() {
        assert!(path.ends_with("zlog/zlog.toml"));
    }
}

#[test]
fn logger_from_config() {
    let config: Config = r#"
        [general]
        name = "svc"
        level = "error"
        pattern = "{t} "

        [flags]
        colors = false

        [file]
        mode = "truncate"
    "#
    .parse()
    .unwrap();

    let logger = Logger::from_config(&config);
    assert_eq!(logger.name(), "svc");
    assert_eq!(logger.level(), Level::Error);
    assert_eq!(logger.pattern(), "{t} ");
    assert_eq!(logger.flags(), Flags::DEBUG);
    assert_eq!(logger.file_mode(), FileMode::Truncate);
}

#[test]
fn error_policy_from_str() {
    assert_eq!("exit".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Exit);
    assert_eq!("Report".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Report);
    assert!("panic".parse::<ErrorPolicy>().is_err());
}
