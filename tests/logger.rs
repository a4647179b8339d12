//! Tests for console emission on a standalone logger.

use zlog::{CallSite, Console, Destination, Error, FixedClock, Flags, Level, Logger, MemorySink};

fn site() -> CallSite {
    CallSite::new("src/main.rs", 7, "main")
}

fn capture(pattern: &str, flags: Flags) -> (Logger, MemorySink) {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .name("app")
        .pattern(pattern)
        .flags(flags)
        .console(Console::Memory(memory.clone()))
        .clock(FixedClock::at(2024, 3, 5, 9, 7, 3).unwrap())
        .build();
    (logger, memory)
}

#[test]
fn console_emission_is_prefix_then_message() {
    let (mut logger, memory) = capture("{n} {t} ", Flags::DEBUG);
    logger
        .log_to_console(Level::Warning, site(), format_args!("disk at {}%\n", 91))
        .unwrap();
    assert_eq!(memory.contents_string(), "app [WARNING] disk at 91%\n");
}

#[test]
fn no_newline_is_added() {
    let (mut logger, memory) = capture("", Flags::empty());
    logger
        .log(Level::Info, Destination::Console, site(), format_args!("a"))
        .unwrap();
    logger
        .log(Level::Info, Destination::Console, site(), format_args!("b"))
        .unwrap();
    assert_eq!(memory.contents_string(), "ab");
}

#[test]
fn default_pattern_renders_call_site() {
    let (mut logger, memory) = capture(zlog::fmt::DEFAULT_PATTERN, Flags::DEBUG);
    logger
        .log_to_console(Level::Info, site(), format_args!("hi\n"))
        .unwrap();
    assert_eq!(
        memory.contents_string(),
        "05/03/2024 09:07:03 | main @ src/main.rs:7 | app | [INFO] > hi\n"
    );
}

#[test]
fn entry_point_sets_current_level() {
    let (mut logger, _memory) = capture("", Flags::empty());
    logger
        .log_to_console(Level::Trace, site(), format_args!(""))
        .unwrap();
    assert_eq!(logger.level(), Level::Trace);
}

#[test]
fn debug_is_suppressed_without_debug_flag() {
    let (mut logger, memory) = capture("{t} ", Flags::empty());
    logger
        .log_to_console(Level::Debug, site(), format_args!("hidden\n"))
        .unwrap();
    assert!(memory.is_empty());

    logger.set_flags(Flags::DEBUG);
    logger
        .log_to_console(Level::Debug, site(), format_args!("shown\n"))
        .unwrap();
    assert_eq!(memory.contents_string(), "[DEBUG] shown\n");
}

#[test]
fn only_debug_without_flag_is_suppressed() {
    for level in Level::all() {
        let (mut logger, memory) = capture("{t} ", Flags::empty());
        logger
            .log_to_console(level, site(), format_args!("x"))
            .unwrap();
        let expected = if level == Level::Debug {
            String::new()
        } else {
            format!("[{}] x", level.tag())
        };
        assert_eq!(memory.contents_string(), expected, "level {level}");
        assert_eq!(logger.level(), level);
    }
}

#[test]
fn suppressed_debug_keeps_installed_sink() {
    let (mut logger, console) = capture("{t} ", Flags::empty());
    let redirected = MemorySink::new();
    logger.set_output_stream(redirected.clone());

    logger
        .log_to_console(Level::Debug, site(), format_args!("hidden\n"))
        .unwrap();
    assert_eq!(logger.level(), Level::Debug);

    logger.set_level(Level::Info);
    logger.emit(site(), format_args!("x")).unwrap();
    assert_eq!(redirected.contents_string(), "[INFO] x");
    assert!(console.is_empty());
    assert!(logger.flags().is_empty());
}

#[test]
fn colors_follow_flag() {
    let (mut logger, memory) = capture("{t}", Flags::ALL);
    logger
        .log_to_console(Level::Error, site(), format_args!("x"))
        .unwrap();
    assert_eq!(memory.contents_string(), "\x1b[0;31m[ERROR]\x1b[0mx");
}

#[test]
fn malformed_pattern_writes_nothing() {
    let (mut logger, memory) = capture("{D", Flags::DEBUG);
    let err = logger
        .log_to_console(Level::Info, site(), format_args!("lost\n"))
        .unwrap_err();
    assert!(matches!(err, Error::Pattern(_)));
    assert!(memory.is_empty());
}

#[test]
fn set_pattern_applies_to_next_emission() {
    let (mut logger, memory) = capture("{n}: ", Flags::empty());
    logger
        .log_to_console(Level::Info, site(), format_args!("one\n"))
        .unwrap();
    logger.set_pattern("{t} ");
    logger
        .log_to_console(Level::Info, site(), format_args!("two\n"))
        .unwrap();
    assert_eq!(memory.contents_string(), "app: one\n[INFO] two\n");
    assert_eq!(logger.pattern(), "{t} ");
}

#[test]
fn emit_uses_manually_installed_sink() {
    let (mut logger, console) = capture("{t} ", Flags::empty());
    let other = MemorySink::new();
    logger.set_output_stream(other.clone());
    logger.set_level(Level::Error);
    logger.emit(site(), format_args!("direct")).unwrap();
    assert_eq!(other.contents_string(), "[ERROR] direct");
    assert!(console.is_empty());
}

#[test]
fn non_terminal_sink_leaves_colors_alone() {
    let (mut logger, _memory) = capture("", Flags::DEBUG);
    logger.set_output_stream(MemorySink::new());
    assert!(!logger.flags().contains(Flags::USE_COLORS));
}

#[test]
fn close_stream_returns_to_console() {
    let (mut logger, console) = capture("", Flags::empty());
    logger.set_output_stream(MemorySink::new());
    logger.close_stream().unwrap();
    logger.emit(site(), format_args!("back")).unwrap();
    assert_eq!(console.contents_string(), "back");
}

#[test]
fn new_logger_defaults() {
    let logger = Logger::new("svc");
    assert_eq!(logger.name(), "svc");
    assert_eq!(logger.level(), Level::Info);
    assert_eq!(logger.pattern(), zlog::fmt::DEFAULT_PATTERN);
    assert_eq!(logger.file_mode(), zlog::FileMode::Append);
    assert!(matches!(logger.sink(), zlog::Sink::Stderr));
}
