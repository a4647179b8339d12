//! The pattern language that decorates every log line.
//!
//! A pattern is literal text mixed with single-character placeholders written `{X}`.
//! Parsing is strict about braces: after `{` exactly one code character must follow,
//! then `}`. Codes outside the known set are accepted and render as nothing.
//!
//! With colors on, each placeholder value is preceded by its color escape, and every
//! unit of the pattern (a literal character or a whole placeholder) is followed by a
//! reset, so no color ever leaks into the next unit.

use super::{AnsiColor, CallSite, colorize};
use crate::level::Level;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Date, time, call site, logger name and tag.
pub const DEFAULT_PATTERN: &str = "{D}/{M}/{Y} {h}:{m}:{s} | {f} @ {l} | {n} | {t} > ";

/// Closed set of recognized placeholder codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{D}` day of month, two digits.
    Day,
    /// `{M}` month 1-12, two digits.
    Month,
    /// `{Y}` full year, unpadded.
    Year,
    /// `{h}` hour (24h), two digits.
    Hour,
    /// `{m}` minute, two digits.
    Minute,
    /// `{s}` second, two digits.
    Second,
    /// `{f}` name of the calling function.
    Function,
    /// `{l}` `file:line` of the call.
    Location,
    /// `{n}` logger name.
    Name,
    /// `{t}` `[TAG]` of the current level.
    Tag,
}

impl Placeholder {
    pub const ALL: &'static [Self] = &[
        Self::Day,
        Self::Month,
        Self::Year,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Function,
        Self::Location,
        Self::Name,
        Self::Tag,
    ];

    /// The character written between the braces.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Day => 'D',
            Self::Month => 'M',
            Self::Year => 'Y',
            Self::Hour => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
            Self::Function => 'f',
            Self::Location => 'l',
            Self::Name => 'n',
            Self::Tag => 't',
        }
    }

    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'D' => Some(Self::Day),
            'M' => Some(Self::Month),
            'Y' => Some(Self::Year),
            'h' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            's' => Some(Self::Second),
            'f' => Some(Self::Function),
            'l' => Some(Self::Location),
            'n' => Some(Self::Name),
            't' => Some(Self::Tag),
            _ => None,
        }
    }

    /// Time fields share one color, call-site fields another, the tag follows its level.
    #[must_use]
    pub const fn color(self, level: Level) -> AnsiColor {
        match self {
            Self::Day | Self::Month | Self::Year | Self::Hour | Self::Minute | Self::Second => {
                AnsiColor::Yellow
            }
            Self::Function | Self::Location | Self::Name => AnsiColor::Magenta,
            Self::Tag => level.color(),
        }
    }
}

/// One unit of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim.
    Literal(String),
    Placeholder(Placeholder),
    /// Well-formed braces around an unknown code; `None` for `{}`. Renders nothing.
    Unknown(Option<char>),
}

/// Everything a placeholder can draw from during one emission.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub timestamp: NaiveDateTime,
    pub site: CallSite,
    pub logger_name: &'a str,
    pub level: Level,
}

/// A placeholder opened with `{` was not closed by `}` right after its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pattern: String,
    offset: usize,
    found: Option<char>,
}

impl PatternError {
    /// The pattern as it was given.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Byte offset of the `{` that opened the broken placeholder.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// What stood where `}` was required; `None` when the pattern ended first.
    #[must_use]
    pub const fn found(&self) -> Option<char> {
        self.found
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid pattern {:?}: missing closing bracket for placeholder at byte {}",
            self.pattern, self.offset
        )?;
        match self.found {
            Some(c) => write!(f, " (found {c:?})"),
            None => write!(f, " (found end of pattern)"),
        }
    }
}

impl std::error::Error for PatternError {}

/// A validated pattern, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Splits the pattern into literal runs and placeholders.
    ///
    /// # Errors
    /// Returns [`PatternError`] for a `{` that is not followed by a code and a `}`.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices();

        while let Some((offset, c)) = chars.next() {
            if c != '{' {
                literal.push(c);
                continue;
            }

            let error = |found| PatternError {
                pattern: source.to_string(),
                offset,
                found,
            };

            let segment = match chars.next() {
                None => return Err(error(None)),
                Some((_, '}')) => Segment::Unknown(None),
                Some((_, code)) => match chars.next() {
                    Some((_, '}')) => Placeholder::from_code(code)
                        .map_or(Segment::Unknown(Some(code)), Segment::Placeholder),
                    other => return Err(error(other.map(|(_, c)| c))),
                },
            };

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders the decoration prefix for one record.
    #[must_use]
    pub fn render(&self, ctx: &RenderContext<'_>, colors: bool) -> String {
        let mut out = String::with_capacity(self.source.len() * 2);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    for c in text.chars() {
                        out.push(c);
                        if colors {
                            out.push_str(AnsiColor::RESET);
                        }
                    }
                }
                Segment::Placeholder(ph) => {
                    let value = placeholder_value(*ph, ctx);
                    if colors {
                        out.push_str(&colorize(&value, ph.color(ctx.level)));
                    } else {
                        out.push_str(&value);
                    }
                }
                Segment::Unknown(_) => {
                    if colors {
                        out.push_str(AnsiColor::RESET);
                    }
                }
            }
        }

        out
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn placeholder_value(placeholder: Placeholder, ctx: &RenderContext<'_>) -> String {
    let ts = &ctx.timestamp;
    match placeholder {
        Placeholder::Day => format!("{:02}", ts.day()),
        Placeholder::Month => format!("{:02}", ts.month()),
        Placeholder::Year => ts.year().to_string(),
        Placeholder::Hour => format!("{:02}", ts.hour()),
        Placeholder::Minute => format!("{:02}", ts.minute()),
        Placeholder::Second => format!("{:02}", ts.second()),
        Placeholder::Function => ctx.site.function.to_string(),
        Placeholder::Location => format!("{}:{}", ctx.site.file, ctx.site.line),
        Placeholder::Name => ctx.logger_name.to_string(),
        Placeholder::Tag => format!("[{}]", ctx.level.tag()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_runs_are_merged_between_placeholders() {
        let pattern = Pattern::parse("ab{D}cd").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("ab".to_string()),
                Segment::Placeholder(Placeholder::Day),
                Segment::Literal("cd".to_string()),
            ]
        );
    }

    #[test]
    fn empty_braces_parse_as_unknown() {
        let pattern = Pattern::parse("{}x").unwrap();
        assert_eq!(
            pattern.segments(),
            &[Segment::Unknown(None), Segment::Literal("x".to_string())]
        );
    }

    #[test]
    fn every_code_round_trips() {
        for ph in Placeholder::ALL {
            assert_eq!(Placeholder::from_code(ph.code()), Some(*ph));
        }
    }

    #[test]
    fn error_offset_is_byte_offset_of_brace() {
        let err = Pattern::parse("é{Dx").unwrap_err();
        assert_eq!(err.offset(), 2);
        assert_eq!(err.found(), Some('x'));
    }
}
