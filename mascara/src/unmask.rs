//! The `unmask` table: display strings back to canonical values.
//!
//! ```rust
//! use mascara::unmask;
//!
//! assert_eq!(unmask::cpf("123.456.789-01"), "12345678901");
//! assert_eq!(unmask::date("05/10/2023"), "2023-10-05");
//! assert_eq!(unmask::currency("1.234,56"), Some(1234.56));
//! assert_eq!(unmask::phone("(11) 98765-4321").as_deref(), Some("+5511987654321"));
//! ```

use crate::{
    engine::{Template, only_numeric, to_mask_date},
    input::MaskInput,
    mask::Amount,
};

/// Digits of a CNPJ.
pub fn cnpj<I>(value: I) -> String
where
    I: MaskInput,
{
    only_numeric(value)
}

/// Digits of a CPF.
pub fn cpf<I>(value: I) -> String
where
    I: MaskInput,
{
    only_numeric(value)
}

/// Digits of a zipcode.
pub fn zipcode<I>(value: I) -> String
where
    I: MaskInput,
{
    only_numeric(value)
}

/// Normalizes a time through the `__:__` template.
pub fn time<I>(value: I) -> String
where
    I: MaskInput,
{
    Template::TIME.apply(value)
}

/// Reformats a display date (`DD/MM/YYYY`) as `YYYY-MM-DD`.
///
/// ISO input passes through reformatted; unparseable input yields the date
/// fallback text.
pub fn date<I>(value: I) -> String
where
    I: MaskInput,
{
    to_mask_date(value, "YYYY-MM-DD")
}

/// Reads a masked amount back as a number, e.g. `"1.234,56"` → `1234.56`.
///
/// The last two digits are the decimal part. Returns `None` for empty or
/// non-numeric input.
pub fn currency<I>(value: I) -> Option<f64>
where
    I: MaskInput,
{
    let amount = Amount::parse(&value.to_raw())?;
    let (integer, decimal) = amount.split();
    let integer = if integer.is_empty() { "0" } else { integer };
    let sign = if amount.negative { "-" } else { "" };
    format!("{sign}{integer}.{decimal:0>2}").parse().ok()
}

/// Canonical E.164-style phone number, e.g. `"(11) 98765-4321"` →
/// `"+5511987654321"`.
///
/// Numbers already starting with the `55` country code only gain the `+`.
/// Returns `None` when the value has no digits.
pub fn phone<I>(value: I) -> Option<String>
where
    I: MaskInput,
{
    let digits = only_numeric(value);
    if digits.is_empty() {
        None
    } else if digits.starts_with("55") {
        Some(format!("+{digits}"))
    } else {
        Some(format!("+55{digits}"))
    }
}
