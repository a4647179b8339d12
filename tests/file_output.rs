//! Tests for file emission, write modes and clearing.

use std::fs;
use tempfile::TempDir;
use zlog::{CallSite, Console, Error, FileMode, FixedClock, Flags, Level, Logger, MemorySink};

fn site() -> CallSite {
    CallSite::new("src/worker.rs", 12, "run")
}

fn logger(flags: Flags) -> (Logger, MemorySink) {
    let console = MemorySink::new();
    let logger = Logger::builder()
        .name("app")
        .pattern("{n} {t} ")
        .flags(flags)
        .console(Console::Memory(console.clone()))
        .clock(FixedClock::at(2024, 3, 5, 9, 7, 3).unwrap())
        .build();
    (logger, console)
}

#[test]
fn file_output_has_no_escapes() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let (mut logger, console) = logger(Flags::ALL);

    logger
        .log_to_file(&path, Level::Error, site(), format_args!("boom\n"))
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "app [ERROR] boom\n");
    assert!(console.is_empty());
}

#[test]
fn colors_are_restored_after_file_emission() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let (mut logger, console) = logger(Flags::ALL);

    logger
        .log_to_file(&path, Level::Info, site(), format_args!("x\n"))
        .unwrap();
    assert_eq!(logger.flags(), Flags::ALL);

    logger
        .log_to_console(Level::Info, site(), format_args!("y"))
        .unwrap();
    assert!(console.contents_string().contains("\x1b[0;32m[INFO]"));
}

#[test]
fn colors_stay_off_when_they_were_off() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let (mut logger, _console) = logger(Flags::DEBUG);

    logger
        .log_to_file(&path, Level::Info, site(), format_args!("x\n"))
        .unwrap();
    assert_eq!(logger.flags(), Flags::DEBUG);
}

#[test]
fn sink_returns_to_console_after_file_emission() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let (mut logger, _console) = logger(Flags::DEBUG);

    logger
        .log_to_file(&path, Level::Info, site(), format_args!("x\n"))
        .unwrap();
    assert!(!logger.sink().is_file());
}

#[test]
fn append_mode_accumulates() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let (mut logger, _console) = logger(Flags::DEBUG);

    for word in ["one", "two", "three"] {
        logger
            .log_to_file(&path, Level::Trace, site(), format_args!("{word}\n"))
            .unwrap();
    }

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "app [TRACE] one\napp [TRACE] two\napp [TRACE] three\n"
    );
}

#[test]
fn truncate_mode_keeps_only_last_record() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    fs::write(&path, "old contents\n").unwrap();
    let (mut logger, _console) = logger(Flags::DEBUG);
    logger.set_file_write_mode(FileMode::Truncate);

    logger
        .log_to_file(&path, Level::Info, site(), format_args!("first\n"))
        .unwrap();
    logger
        .log_to_file(&path, Level::Info, site(), format_args!("second\n"))
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "app [INFO] second\n");
}

#[test]
fn suppressed_debug_does_not_create_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("debug.log");
    let (mut logger, _console) = logger(Flags::USE_COLORS);

    logger
        .log_to_file(&path, Level::Debug, site(), format_args!("hidden\n"))
        .unwrap();

    assert!(!path.exists());
    assert_eq!(logger.flags(), Flags::USE_COLORS);
}

#[test]
fn open_failure_reports_on_console_and_sets_fatal() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("missing").join("app.log");
    let (mut logger, console) = logger(Flags::DEBUG);

    let err = logger
        .log_to_file(&path, Level::Info, site(), format_args!("lost\n"))
        .unwrap_err();

    assert!(matches!(err, Error::OpenFile { .. }));
    assert!(err.is_reported());
    assert_eq!(logger.level(), Level::Fatal);
    let reported = console.contents_string();
    assert!(reported.starts_with("app [FATAL] Couldn't open file: "));
    assert!(reported.contains("app.log"));
    assert!(!reported.contains("lost"));
}

#[test]
fn broken_pattern_leaves_file_empty_and_restores_colors() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let (mut logger, _console) = logger(Flags::ALL);
    logger.set_pattern("{t");

    let err = logger
        .log_to_file(&path, Level::Info, site(), format_args!("lost\n"))
        .unwrap_err();

    assert!(matches!(err, Error::Pattern(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert_eq!(logger.flags(), Flags::ALL);
    assert!(!logger.sink().is_file());
}

#[test]
fn manual_open_emit_close() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("manual.log");
    let (mut logger, console) = logger(Flags::empty());

    logger.open_file(&path).unwrap();
    assert_eq!(logger.sink().path(), Some(path.as_path()));
    logger.set_level(Level::Warning);
    logger.emit(site(), format_args!("a\n")).unwrap();
    logger.close_stream().unwrap();
    logger.emit(site(), format_args!("b\n")).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "app [WARNING] a\n");
    assert_eq!(console.contents_string(), "app [WARNING] b\n");
}

#[test]
fn clear_file_then_append() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    fs::write(&path, "stale\n").unwrap();
    let (mut logger, _console) = logger(Flags::empty());

    logger.clear_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    logger
        .log_to_file(&path, Level::Info, site(), format_args!("fresh\n"))
        .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "app [INFO] fresh\n");
}

#[test]
fn clear_file_creates_missing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("new.log");
    let (logger, _console) = logger(Flags::empty());

    logger.clear_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn file_mode_parsing() {
    assert_eq!("a".parse::<FileMode>().unwrap(), FileMode::Append);
    assert_eq!("append".parse::<FileMode>().unwrap(), FileMode::Append);
    assert_eq!("w".parse::<FileMode>().unwrap(), FileMode::Truncate);
    assert_eq!("TRUNCATE".parse::<FileMode>().unwrap(), FileMode::Truncate);
    let err = "x".parse::<FileMode>().unwrap_err();
    assert!(matches!(Error::from(err), Error::InvalidFileMode(s) if s == "x"));
}
