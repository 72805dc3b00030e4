//! The `mask` table: raw values to display strings.
//!
//! Every function here is total. Empty input, or input without the digits a
//! mask needs, yields an empty string.
//!
//! ```rust
//! use mascara::mask;
//!
//! assert_eq!(mask::cnpj("11222333000181"), "11.222.333/0001-81");
//! assert_eq!(mask::zipcode("01310100"), "01310-100");
//! assert_eq!(mask::currency("123456"), "1.234,56");
//! ```

use crate::{
    engine::{DatePattern, Template, only_numeric},
    input::{MaskInput, Raw},
};
pub use crate::format::{accent, capitalize, datetime, name, search};

/// `__.___.___/____-__`
pub fn cnpj<I>(value: I) -> String
where
    I: MaskInput,
{
    Template::CNPJ.apply(value)
}

/// `___.___.___-__`
pub fn cpf<I>(value: I) -> String
where
    I: MaskInput,
{
    Template::CPF.apply(value)
}

/// `__:__`
pub fn time<I>(value: I) -> String
where
    I: MaskInput,
{
    Template::TIME.apply(value)
}

/// `_____-___`
pub fn zipcode<I>(value: I) -> String
where
    I: MaskInput,
{
    Template::ZIPCODE.apply(value)
}

/// Masks a date as `DD/MM/YYYY`.
///
/// Text of exactly ten characters, or containing a `T`, is treated as a
/// complete date and reformatted first. Anything shorter is masked digit by
/// digit, so partially typed dates stay usable.
pub fn date<I>(value: I) -> String
where
    I: MaskInput,
{
    match value.to_raw() {
        Raw::Text(text) if text.chars().count() == 10 || text.contains('T') => {
            let reformatted = DatePattern::DISPLAY.reformat(&text).into_string();
            Template::DATE.apply(reformatted)
        }
        raw => Template::DATE.apply(raw),
    }
}

/// Masks a Brazilian phone number.
///
/// A leading `+55` is dropped. Numbers dialled with a leading zero use
/// `____-___-____`, eleven digits use `(__) _____-____` and everything else
/// uses `(__) ____-____`.
pub fn phone<I>(value: I) -> String
where
    I: MaskInput,
{
    let raw = value.to_raw();
    let digits = only_numeric(raw.as_text().replacen("+55", "", 1));
    let template = if digits.starts_with('0') {
        Template::PHONE_PREFIXED
    } else if digits.len() == 11 {
        Template::PHONE_MOBILE
    } else {
        Template::PHONE_LANDLINE
    };
    template.apply(digits)
}

/// Masks an amount typed as cents, e.g. `"123456"` → `"1.234,56"`.
///
/// `.` and `,` in the input are ignored, so already-masked amounts mask to
/// themselves. An amount of zero masks to the empty string, signalling that
/// nothing was typed yet. Anything other than plain digits, including exponent
/// (`1e3`) and hex (`0x10`) notation, also yields the empty string.
pub fn currency<I>(value: I) -> String
where
    I: MaskInput,
{
    let Some(amount) = Amount::parse(&value.to_raw()) else {
        return String::new();
    };
    let (integer, decimal) = amount.split();
    if decimal == "0" {
        return String::new();
    }
    let integer = if integer.is_empty() {
        "0".to_string()
    } else {
        group_thousands(integer)
    };
    let sign = if amount.negative { "-" } else { "" };
    format!("{sign}{integer},{decimal:0>2}")
}

/// An amount normalized to its integer digits.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Amount {
    pub(crate) negative: bool,
    /// Digits without leading zeros; `"0"` for zero.
    digits: String,
}

impl Amount {
    /// Strips `.` and `,` and reads what is left as a whole number.
    pub(crate) fn parse(raw: &Raw<'_>) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let text = raw.as_text();
        let stripped: String = text.chars().filter(|ch| !matches!(ch, '.' | ',')).collect();
        let trimmed = stripped.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if unsigned.is_empty() {
            // Only a bare sign is rejected; an input of nothing but separators is zero.
            return trimmed.is_empty().then(|| Self {
                negative: false,
                digits: "0".to_string(),
            });
        }
        if !unsigned.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        let significant = unsigned.trim_start_matches('0');
        let digits = if significant.is_empty() {
            "0".to_string()
        } else {
            significant.to_string()
        };
        Some(Self { negative, digits })
    }

    /// Splits into the integer part (all but the last two digits) and the
    /// decimal part (the last one or two digits).
    pub(crate) fn split(&self) -> (&str, &str) {
        self.digits.split_at(self.digits.len().saturating_sub(2))
    }
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
