//! Logging macros.
//!
//! Every macro captures the caller's file, line and function name and formats its
//! arguments lazily with `format_args!`. No newline is added.
//!
//! ```no_run
//! zlog::info!("listening on {}\n", 8080);
//! zlog::error!(to: "/tmp/app.log", "lost {} packets\n", 3);
//! ```

/// Logs at an explicit level, to the console or (with `to:`) to a file.
///
/// Failures go through the global [`ErrorPolicy`](crate::ErrorPolicy).
#[macro_export]
macro_rules! log {
    (to: $path:expr, $level:expr, $($arg:tt)+) => {
        $crate::logger::global::emit(
            $level,
            $crate::Destination::File(::std::path::Path::new(&$path)),
            $crate::call_site!(),
            ::std::format_args!($($arg)+),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::logger::global::emit(
            $level,
            $crate::Destination::Console,
            $crate::call_site!(),
            ::std::format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! info {
    (to: $path:expr, $($arg:tt)+) => { $crate::log!(to: $path, $crate::Level::Info, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Info, $($arg)+) };
}

/// Hidden unless the `DEBUG` flag is set; a hidden file record does not touch the file.
#[macro_export]
macro_rules! debug {
    (to: $path:expr, $($arg:tt)+) => { $crate::log!(to: $path, $crate::Level::Debug, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! trace {
    (to: $path:expr, $($arg:tt)+) => { $crate::log!(to: $path, $crate::Level::Trace, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    (to: $path:expr, $($arg:tt)+) => { $crate::log!(to: $path, $crate::Level::Warning, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    (to: $path:expr, $($arg:tt)+) => { $crate::log!(to: $path, $crate::Level::Error, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Error, $($arg)+) };
}

/// Logs at FATAL. The process keeps running.
#[macro_export]
macro_rules! fatal {
    (to: $path:expr, $($arg:tt)+) => { $crate::log!(to: $path, $crate::Level::Fatal, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Fatal, $($arg)+) };
}
