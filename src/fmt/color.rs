//! The fixed ANSI palette used for log decoration.

/// Color token mapped to a `\x1b[0;3Xm` escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl AnsiColor {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// The escape sequence that switches the terminal foreground to this color.
    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Red => "\x1b[0;31m",
            Self::Green => "\x1b[0;32m",
            Self::Yellow => "\x1b[0;33m",
            Self::Blue => "\x1b[0;34m",
            Self::Magenta => "\x1b[0;35m",
            Self::Cyan => "\x1b[0;36m",
        }
    }
}

/// Wraps `text` in the color escape and a trailing reset.
#[must_use]
pub fn colorize(text: &str, color: AnsiColor) -> String {
    let fg = color.escape();
    let reset = AnsiColor::RESET;
    format!("{fg}{text}{reset}")
}

/// Drops every `ESC [ ... m` sequence, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
