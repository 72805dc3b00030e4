//! Text formatting for names, free text and timestamps.
//!
//! These helpers are exposed through the [`mask`](crate::mask) table next to the
//! template-based masks. All of them return an empty string for empty input.

use std::{collections::HashMap, sync::LazyLock};

use crate::{
    engine::{DATE_FALLBACK, DatePattern, date::parse_datetime},
    input::MaskInput,
};

#[rustfmt::skip]
const ACCENTED: &[(char, char)] = &[
    ('À', 'A'), ('Á', 'A'), ('Â', 'A'), ('Ã', 'A'), ('Ä', 'A'), ('Å', 'A'),
    ('à', 'a'), ('á', 'a'), ('â', 'a'), ('ã', 'a'), ('ä', 'a'), ('å', 'a'),
    ('Ò', 'O'), ('Ó', 'O'), ('Ô', 'O'), ('Õ', 'O'), ('Ö', 'O'), ('Ø', 'O'),
    ('ò', 'o'), ('ó', 'o'), ('ô', 'o'), ('õ', 'o'), ('ö', 'o'), ('ø', 'o'),
    ('È', 'E'), ('É', 'E'), ('Ê', 'E'), ('Ë', 'E'),
    ('è', 'e'), ('é', 'e'), ('ê', 'e'), ('ë', 'e'),
    ('Ç', 'C'), ('ç', 'c'),
    ('Ð', 'D'), ('ð', 'd'),
    ('Ì', 'I'), ('Í', 'I'), ('Î', 'I'), ('Ï', 'I'),
    ('ì', 'i'), ('í', 'i'), ('î', 'i'), ('ï', 'i'),
    ('Ù', 'U'), ('Ú', 'U'), ('Û', 'U'), ('Ü', 'U'),
    ('ù', 'u'), ('ú', 'u'), ('û', 'u'), ('ü', 'u'),
    ('Ñ', 'N'), ('ñ', 'n'),
    ('Š', 'S'), ('š', 's'),
    ('Ÿ', 'Y'), ('Ý', 'Y'), ('ÿ', 'y'), ('ý', 'y'),
    ('Ž', 'Z'), ('ž', 'z'),
];

static ACCENTS: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| ACCENTED.iter().copied().collect());

/// Words kept in lowercase by [`name`].
pub const NAME_STOPWORDS: &[&str] = &[
    "a", "as", "à", "às", "com", "da", "de", "do", "e", "etc", "na", "no", "o",
];

/// Replaces accented Latin letters with their unaccented equivalents.
///
/// Characters outside the accent table pass through unchanged.
///
/// ```rust
/// assert_eq!(mascara::format::accent("Conceição"), "Conceicao");
/// ```
pub fn accent<I>(value: I) -> String
where
    I: MaskInput,
{
    strip_accents(&value.to_raw().as_text())
}

fn strip_accents(text: &str) -> String {
    text.chars()
        .map(|ch| ACCENTS.get(&ch).copied().unwrap_or(ch))
        .collect()
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize<I>(value: I) -> String
where
    I: MaskInput,
{
    capitalize_word(&value.to_raw().as_text())
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Renders a timestamp as `DD/MM/YYYY às HH:mm`.
///
/// Accepts ISO dates, ISO datetimes and RFC 3339 timestamps (rendered in their
/// own offset). Numbers are epoch milliseconds. Unparseable input renders
/// the date fallback in both positions.
pub fn datetime<I>(value: I) -> String
where
    I: MaskInput,
{
    let raw = value.to_raw();
    if raw.is_empty() {
        return String::new();
    }
    match parse_datetime(&raw) {
        Ok(parsed) => format!(
            "{} às {}",
            DatePattern::DISPLAY.render(&parsed),
            DatePattern::CLOCK.render(&parsed)
        ),
        Err(_) => format!("{DATE_FALLBACK} às {DATE_FALLBACK}"),
    }
}

/// Title-cases a person's name, keeping Portuguese particles in lowercase.
///
/// Words are split on single spaces, so runs of spaces are preserved.
///
/// ```rust
/// assert_eq!(mascara::format::name("MARIA DA SILVA"), "Maria da Silva");
/// ```
pub fn name<I>(value: I) -> String
where
    I: MaskInput,
{
    let raw = value.to_raw();
    raw.as_text()
        .split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            if NAME_STOPWORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize_word(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds a plain search key: lowercase, without `.`, `-`, `/` and accents.
///
/// Spaces are retained.
pub fn search<I>(value: I) -> String
where
    I: MaskInput,
{
    let lowered: String = value
        .to_raw()
        .as_text()
        .to_lowercase()
        .chars()
        .filter(|ch| !matches!(ch, '.' | '-' | '/'))
        .collect();
    strip_accents(&lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_replaces_table_entries() {
        assert_eq!(accent("ÀÉÎÕÜ àéîõü Çç Ññ"), "AEIOU aeiou Cc Nn");
        assert_eq!(accent("São Paulo, 123!"), "Sao Paulo, 123!");
        assert_eq!(accent(""), "");
    }

    #[test]
    fn accent_table_is_one_to_one_per_key() {
        assert_eq!(ACCENTS.len(), ACCENTED.len());
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("joão"), "João");
        assert_eq!(capitalize("JOÃO"), "João");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize(None::<String>), "");
    }

    #[test]
    fn datetime_renders_display_string() {
        assert_eq!(datetime("2023-10-05T14:30:00"), "05/10/2023 às 14:30");
        assert_eq!(datetime("2023-10-05"), "05/10/2023 às 00:00");
        assert_eq!(datetime("2023-10-05T14:30:00-03:00"), "05/10/2023 às 14:30");
        assert_eq!(datetime(""), "");
    }

    #[test]
    fn datetime_falls_back_on_garbage() {
        assert_eq!(datetime("garbage"), "Invalid date às Invalid date");
    }

    #[test]
    fn name_keeps_stopwords_lowercase() {
        assert_eq!(name("maria da silva"), "Maria da Silva");
        assert_eq!(name("JOSÉ DOS SANTOS E SOUZA"), "José Dos Santos e Souza");
        assert_eq!(name("ana  de  souza"), "Ana  de  Souza");
        assert_eq!(name("À BEIRA"), "à Beira");
        assert_eq!(name(""), "");
    }

    #[test]
    fn search_strips_punctuation_and_accents() {
        assert_eq!(search("São Paulo - SP"), "sao paulo  sp");
        assert_eq!(search("123.456.789-01"), "12345678901");
        assert_eq!(search("Av. Paulista/Centro"), "av paulistacentro");
        assert_eq!(search(""), "");
    }
}
