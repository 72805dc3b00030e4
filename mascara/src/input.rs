//! Raw input model shared by every helper.
//!
//! All helpers accept anything that implements [`MaskInput`]: string slices,
//! owned strings, numbers, optional values and date/time types. Inputs that are
//! empty strings, `None`, numeric zero or NaN are treated as *empty*, and every
//! helper degrades to its empty result for them.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A raw value as seen by the masking engines.
#[derive(Clone, Debug, PartialEq)]
pub enum Raw<'a> {
    /// No usable input.
    Empty,
    /// Textual input. Never empty.
    Text(Cow<'a, str>),
    /// Integral numeric input. Never zero.
    Integer(i128),
    /// Floating-point numeric input. Never zero or NaN.
    Float(f64),
}

impl<'a> Raw<'a> {
    /// Builds a textual raw value, mapping the empty string to [`Raw::Empty`].
    pub fn text<S>(value: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// Builds an integral raw value, mapping zero to [`Raw::Empty`].
    pub fn integer(value: i128) -> Self {
        if value == 0 {
            Self::Empty
        } else {
            Self::Integer(value)
        }
    }

    /// Builds a floating-point raw value, mapping zero and NaN to [`Raw::Empty`].
    pub fn float(value: f64) -> Self {
        if value == 0.0 || value.is_nan() {
            Self::Empty
        } else {
            Self::Float(value)
        }
    }

    /// Returns `true` when there is nothing to mask.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for numeric inputs.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Renders the value as text. Numbers use their plain decimal form.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Empty => Cow::Borrowed(""),
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::Integer(value) => Cow::Owned(value.to_string()),
            Self::Float(value) => Cow::Owned(float_to_text(*value)),
        }
    }
}

fn float_to_text(value: f64) -> String {
    if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else {
        format!("{value}")
    }
}

/// Anything that can be handed to a masking helper.
pub trait MaskInput {
    /// Returns the raw view of this value.
    fn to_raw(&self) -> Raw<'_>;
}

impl<T: MaskInput + ?Sized> MaskInput for &T {
    fn to_raw(&self) -> Raw<'_> {
        (**self).to_raw()
    }
}

impl<T: MaskInput + ?Sized> MaskInput for Box<T> {
    fn to_raw(&self) -> Raw<'_> {
        (**self).to_raw()
    }
}

impl<T: MaskInput> MaskInput for Option<T> {
    fn to_raw(&self) -> Raw<'_> {
        self.as_ref().map_or(Raw::Empty, MaskInput::to_raw)
    }
}

impl MaskInput for str {
    fn to_raw(&self) -> Raw<'_> {
        Raw::text(self)
    }
}

impl MaskInput for String {
    fn to_raw(&self) -> Raw<'_> {
        Raw::text(self.as_str())
    }
}

impl MaskInput for Cow<'_, str> {
    fn to_raw(&self) -> Raw<'_> {
        Raw::text(self.as_ref())
    }
}

impl MaskInput for Raw<'_> {
    fn to_raw(&self) -> Raw<'_> {
        match self {
            Raw::Empty => Raw::Empty,
            Raw::Text(text) => Raw::Text(Cow::Borrowed(text.as_ref())),
            Raw::Integer(value) => Raw::Integer(*value),
            Raw::Float(value) => Raw::Float(*value),
        }
    }
}

macro_rules! impl_mask_input_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MaskInput for $ty {
                fn to_raw(&self) -> Raw<'_> {
                    Raw::integer(i128::from(*self))
                }
            }
        )*
    };
}

impl_mask_input_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl MaskInput for isize {
    fn to_raw(&self) -> Raw<'_> {
        // isize is at most 64 bits on supported targets.
        i64::try_from(*self).map_or(Raw::Empty, |value| Raw::integer(i128::from(value)))
    }
}

impl MaskInput for usize {
    fn to_raw(&self) -> Raw<'_> {
        u64::try_from(*self).map_or(Raw::Empty, |value| Raw::integer(i128::from(value)))
    }
}

impl MaskInput for u128 {
    fn to_raw(&self) -> Raw<'_> {
        match i128::try_from(*self) {
            Ok(value) => Raw::integer(value),
            #[allow(clippy::cast_precision_loss)]
            Err(_) => Raw::float(*self as f64),
        }
    }
}

impl MaskInput for f32 {
    fn to_raw(&self) -> Raw<'_> {
        Raw::float(f64::from(*self))
    }
}

impl MaskInput for f64 {
    fn to_raw(&self) -> Raw<'_> {
        Raw::float(*self)
    }
}

impl MaskInput for NaiveDate {
    fn to_raw(&self) -> Raw<'_> {
        Raw::Text(Cow::Owned(self.format("%Y-%m-%d").to_string()))
    }
}

impl MaskInput for NaiveDateTime {
    fn to_raw(&self) -> Raw<'_> {
        Raw::Text(Cow::Owned(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()))
    }
}

impl<Tz> MaskInput for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    fn to_raw(&self) -> Raw<'_> {
        Raw::Text(Cow::Owned(self.to_rfc3339()))
    }
}

#[cfg(feature = "time")]
mod time_support {
    use std::borrow::Cow;

    use time::{Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339};

    use super::{MaskInput, Raw};

    fn iso_date(date: Date) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    }

    impl MaskInput for Date {
        fn to_raw(&self) -> Raw<'_> {
            Raw::Text(Cow::Owned(iso_date(*self)))
        }
    }

    impl MaskInput for PrimitiveDateTime {
        fn to_raw(&self) -> Raw<'_> {
            Raw::Text(Cow::Owned(format!(
                "{}T{:02}:{:02}:{:02}",
                iso_date(self.date()),
                self.hour(),
                self.minute(),
                self.second()
            )))
        }
    }

    impl MaskInput for OffsetDateTime {
        fn to_raw(&self) -> Raw<'_> {
            self.format(&Rfc3339)
                .map_or(Raw::Empty, |text| Raw::Text(Cow::Owned(text)))
        }
    }
}
