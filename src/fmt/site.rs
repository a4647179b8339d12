//! Call-site capture for the `{f}` and `{l}` placeholders.
//!
//! File and line come from `file!()`/`line!()` at macro expansion. Rust has no
//! `__FUNCTION__`, so `function_name!` takes the type name of a nested item and trims
//! it down to the enclosing function's own name.

use std::panic::Location;

/// Where a log call was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Fallback for plain function APIs: file and line of the caller, function supplied by hand.
    #[must_use]
    #[track_caller]
    pub fn caller(function: &'static str) -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), function)
    }
}

/// Reduces `krate::module::func::{{closure}}::f` to `func`.
#[doc(hidden)]
#[must_use]
pub fn short_function_name(full: &'static str) -> &'static str {
    let mut name = full.strip_suffix("::f").unwrap_or(full);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name.rsplit("::").next().unwrap_or(name)
}

/// Name of the function the macro is expanded in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::fmt::short_function_name(type_name_of(f))
    }};
}

/// `CallSite` for the line the macro is expanded on.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::fmt::CallSite::new(file!(), line!(), $crate::function_name!())
    };
}
