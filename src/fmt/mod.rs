//! Rendering pieces: colors, the pattern language, call sites and the clock.

mod clock;
mod color;
mod pattern;
mod site;

pub use clock::{Clock, FixedClock, SystemClock};
pub use color::{AnsiColor, colorize, strip_ansi};
pub use pattern::{
    DEFAULT_PATTERN, Pattern, PatternError, Placeholder, RenderContext, Segment,
};
pub use site::{CallSite, short_function_name};
