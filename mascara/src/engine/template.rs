//! Template mask engine.
//!
//! A [`Template`] is a pattern made of literal characters and placeholders.
//! Applying it lays the digits of a value over the placeholders, left to right,
//! and copies literals through unchanged. Output stops right after the last
//! digit: templates truncate, they never pad.

use std::borrow::Cow;

use crate::input::MaskInput;

/// Default placeholder character in templates.
pub const PLACEHOLDER: char = '_';

/// Strips every non-digit character from `value`.
///
/// Empty input returns an empty string.
pub fn only_numeric<I>(value: I) -> String
where
    I: MaskInput,
{
    value
        .to_raw()
        .as_text()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// Applies `template` (using the default `_` placeholder) to the digits of `value`.
pub fn to_mask<I>(value: I, template: &str) -> String
where
    I: MaskInput,
{
    overlay(&only_numeric(value), template, PLACEHOLDER)
}

fn overlay(digits: &str, pattern: &str, placeholder: char) -> String {
    let mut output = String::with_capacity(pattern.len());
    let mut digits = digits.chars().peekable();
    if digits.peek().is_none() {
        return output;
    }

    for ch in pattern.chars() {
        if ch != placeholder {
            output.push(ch);
            continue;
        }
        if let Some(digit) = digits.next() {
            output.push(digit);
        }
        if digits.peek().is_none() {
            break;
        }
    }
    output
}

/// A fixed mask pattern with a placeholder character.
///
/// Use [`Template::new`] for `_` placeholders and [`Template::with_placeholder`]
/// to change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pattern: Cow<'static, str>,
    placeholder: char,
}

impl Template {
    /// `__.___.___/____-__`
    pub const CNPJ: Self = Self::new("__.___.___/____-__");
    /// `___.___.___-__`
    pub const CPF: Self = Self::new("___.___.___-__");
    /// `__/__/____`
    pub const DATE: Self = Self::new("__/__/____");
    /// `(__) _____-____`: mobile numbers with the ninth digit.
    pub const PHONE_MOBILE: Self = Self::new("(__) _____-____");
    /// `(__) ____-____`: eight-digit landlines.
    pub const PHONE_LANDLINE: Self = Self::new("(__) ____-____");
    /// `____-___-____`: numbers dialled with a leading zero.
    pub const PHONE_PREFIXED: Self = Self::new("____-___-____");
    /// `__:__`
    pub const TIME: Self = Self::new("__:__");
    /// `_____-___`
    pub const ZIPCODE: Self = Self::new("_____-___");

    /// Creates a template over a static pattern using [`PLACEHOLDER`].
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            placeholder: PLACEHOLDER,
        }
    }

    /// Creates a template over any pattern using [`PLACEHOLDER`].
    #[must_use]
    pub fn from_pattern<P>(pattern: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self {
            pattern: pattern.into(),
            placeholder: PLACEHOLDER,
        }
    }

    /// Uses a specific placeholder character.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Returns the pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the placeholder character.
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Number of digits this template can hold.
    pub fn capacity(&self) -> usize {
        self.pattern
            .chars()
            .filter(|ch| *ch == self.placeholder)
            .count()
    }

    /// Lays the digits of `value` over this template.
    ///
    /// This method is total: empty or digit-free input yields an empty string
    /// and excess digits are dropped.
    #[must_use]
    pub fn apply<I>(&self, value: I) -> String
    where
        I: MaskInput,
    {
        overlay(&only_numeric(value), &self.pattern, self.placeholder)
    }
}
