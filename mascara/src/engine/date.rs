//! Date reformatting.
//!
//! Dates arrive either in display order (`DD/MM/YYYY`) or in ISO order
//! (`YYYY-MM-DD`, optionally followed by a time). The layout is inferred from
//! the third character: a `/` there means display order. Parsing is permissive
//! about separators but the resulting calendar date must exist.
//!
//! Reformatting never fails: unparseable input renders [`DATE_FALLBACK`].

use std::{borrow::Cow, fmt};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::input::{MaskInput, Raw};

/// Text rendered in place of a date that could not be parsed.
pub const DATE_FALLBACK: &str = "Invalid date";

/// Why a date could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseDateError {
    /// The input was empty.
    Empty,
    /// A day, month or year field had no digits.
    MissingField(&'static str),
    /// The fields do not name an existing date or time.
    OutOfRange,
    /// The input matched none of the accepted date/time layouts.
    Unrecognized,
}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty date input"),
            Self::MissingField(field) => write!(f, "date is missing its {field}"),
            Self::OutOfRange => f.write_str("date is out of range"),
            Self::Unrecognized => f.write_str("unrecognized date/time layout"),
        }
    }
}

impl std::error::Error for ParseDateError {}

/// Result of reformatting a date.
///
/// `Display` renders the formatted text, or [`DATE_FALLBACK`] for
/// [`DateOutput::Invalid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateOutput {
    /// The date parsed and was rendered with the requested pattern.
    Formatted(String),
    /// The date could not be parsed.
    Invalid,
}

impl DateOutput {
    /// Returns `true` when the input parsed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Formatted(_))
    }

    /// Converts into the rendered text.
    pub fn into_string(self) -> String {
        match self {
            Self::Formatted(text) => text,
            Self::Invalid => DATE_FALLBACK.to_string(),
        }
    }
}

impl fmt::Display for DateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formatted(text) => f.write_str(text),
            Self::Invalid => f.write_str(DATE_FALLBACK),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    Month2,
    Month,
    Day2,
    Day,
    Hour2,
    Hour,
    Minute2,
    Second2,
}

// Longest tokens first.
const TOKENS: &[(&str, Token)] = &[
    ("YYYY", Token::Year4),
    ("YY", Token::Year2),
    ("MM", Token::Month2),
    ("DD", Token::Day2),
    ("HH", Token::Hour2),
    ("mm", Token::Minute2),
    ("ss", Token::Second2),
    ("M", Token::Month),
    ("D", Token::Day),
    ("H", Token::Hour),
];

/// An output pattern such as `DD/MM/YYYY`.
///
/// Recognized tokens are `YYYY`, `YY`, `MM`, `M`, `DD`, `D`, `HH`, `H`, `mm` and
/// `ss`. Everything else is copied literally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatePattern {
    pattern: Cow<'static, str>,
}

impl DatePattern {
    /// `DD/MM/YYYY`
    pub const DISPLAY: Self = Self::new("DD/MM/YYYY");
    /// `YYYY-MM-DD`
    pub const ISO: Self = Self::new("YYYY-MM-DD");
    /// `HH:mm`
    pub const CLOCK: Self = Self::new("HH:mm");

    /// Creates a pattern from static text.
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
        }
    }

    /// Creates a pattern from any text.
    #[must_use]
    pub fn from_pattern<P>(pattern: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Returns the pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders `datetime` with this pattern.
    pub fn render(&self, datetime: &NaiveDateTime) -> String {
        let mut output = String::with_capacity(self.pattern.len() + 4);
        let mut rest: &str = &self.pattern;
        'outer: while !rest.is_empty() {
            for (text, token) in TOKENS {
                if let Some(tail) = rest.strip_prefix(text) {
                    push_token(&mut output, *token, datetime);
                    rest = tail;
                    continue 'outer;
                }
            }
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                output.push(ch);
            }
            rest = chars.as_str();
        }
        output
    }

    /// Parses `value` as a date and renders it with this pattern.
    ///
    /// This method is total: failures yield [`DateOutput::Invalid`].
    pub fn reformat<I>(&self, value: I) -> DateOutput
    where
        I: MaskInput,
    {
        match parse_date(&value) {
            Ok(date) => DateOutput::Formatted(self.render(&date.and_time(NaiveTime::MIN))),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                ::tracing::debug!(error = %_err, "date did not parse, rendering fallback");
                DateOutput::Invalid
            }
        }
    }
}

fn push_token(output: &mut String, token: Token, datetime: &NaiveDateTime) {
    let text = match token {
        Token::Year4 => format!("{:04}", datetime.year()),
        Token::Year2 => format!("{:02}", datetime.year().rem_euclid(100)),
        Token::Month2 => format!("{:02}", datetime.month()),
        Token::Month => datetime.month().to_string(),
        Token::Day2 => format!("{:02}", datetime.day()),
        Token::Day => datetime.day().to_string(),
        Token::Hour2 => format!("{:02}", datetime.hour()),
        Token::Hour => datetime.hour().to_string(),
        Token::Minute2 => format!("{:02}", datetime.minute()),
        Token::Second2 => format!("{:02}", datetime.second()),
    };
    output.push_str(&text);
}

/// Two-digit years at or below this pivot land in the 2000s, above it in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: u32 = 68;

/// Takes up to `width` digits, skipping any separators before them.
fn take_digits<'a>(
    rest: &mut &'a str,
    width: usize,
    field: &'static str,
) -> Result<&'a str, ParseDateError> {
    let current: &'a str = *rest;
    let trimmed = current.trim_start_matches(|ch: char| !ch.is_ascii_digit());
    let len = trimmed
        .bytes()
        .take(width)
        .take_while(u8::is_ascii_digit)
        .count();
    if len == 0 {
        return Err(ParseDateError::MissingField(field));
    }
    let (digits, tail) = trimmed.split_at(len);
    *rest = tail;
    Ok(digits)
}

fn take_field(rest: &mut &str, width: usize, field: &'static str) -> Result<u32, ParseDateError> {
    take_digits(rest, width, field)?
        .parse()
        .map_err(|_| ParseDateError::OutOfRange)
}

/// Reads a year of up to four digits. Two-digit years are expanded around
/// [`TWO_DIGIT_YEAR_PIVOT`] (`20` → 2020, `99` → 1999).
fn take_year(rest: &mut &str) -> Result<u32, ParseDateError> {
    let digits = take_digits(rest, 4, "year")?;
    let year: u32 = digits.parse().map_err(|_| ParseDateError::OutOfRange)?;
    Ok(match digits.len() {
        2 if year <= TWO_DIGIT_YEAR_PIVOT => 2000 + year,
        2 => 1900 + year,
        _ => year,
    })
}

/// Parses a date in display order (`DD/MM/YYYY`) or ISO order (`YYYY-MM-DD`).
///
/// The layout is chosen from the third character: `/` selects display order.
/// Anything after the date (such as an ISO time component) is ignored.
pub fn parse_date<I>(value: I) -> Result<NaiveDate, ParseDateError>
where
    I: MaskInput,
{
    let raw = value.to_raw();
    if raw.is_empty() {
        return Err(ParseDateError::Empty);
    }
    let text = raw.as_text();
    let mut rest: &str = &text;

    let (year, month, day) = if text.chars().nth(2) == Some('/') {
        let day = take_field(&mut rest, 2, "day")?;
        let month = take_field(&mut rest, 2, "month")?;
        let year = take_year(&mut rest)?;
        (year, month, day)
    } else {
        let year = take_year(&mut rest)?;
        let month = take_field(&mut rest, 2, "month")?;
        let day = take_field(&mut rest, 2, "day")?;
        (year, month, day)
    };

    let year = i32::try_from(year).map_err(|_| ParseDateError::OutOfRange)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseDateError::OutOfRange)
}

const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a point in time.
///
/// Text may be an RFC 3339 timestamp (kept in its own offset), a naive ISO
/// datetime or an ISO date (midnight). Numbers are epoch milliseconds in UTC.
pub fn parse_datetime<I>(value: I) -> Result<NaiveDateTime, ParseDateError>
where
    I: MaskInput,
{
    match value.to_raw() {
        Raw::Empty => Err(ParseDateError::Empty),
        Raw::Integer(millis) => from_millis(i64::try_from(millis).ok()),
        #[allow(clippy::cast_possible_truncation)]
        Raw::Float(millis) => from_millis(millis.is_finite().then_some(millis.trunc() as i64)),
        Raw::Text(text) => {
            let text = text.trim();
            if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
                return Ok(datetime.naive_local());
            }
            if let Some(datetime) = DATETIME_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
            {
                return Ok(datetime);
            }
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|_| ParseDateError::Unrecognized)
        }
    }
}

fn from_millis(millis: Option<i64>) -> Result<NaiveDateTime, ParseDateError> {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|datetime| datetime.naive_utc())
        .ok_or(ParseDateError::OutOfRange)
}

/// Reformats `value` with the output `pattern` (e.g. `DD/MM/YYYY`).
///
/// Empty input returns an empty string; unparseable input returns
/// [`DATE_FALLBACK`].
pub fn to_mask_date<I>(value: I, pattern: &str) -> String
where
    I: MaskInput,
{
    if value.to_raw().is_empty() {
        return String::new();
    }
    DatePattern::from_pattern(pattern.to_string())
        .reformat(value)
        .into_string()
}
