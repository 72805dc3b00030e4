//! Field-name dispatch for the `mask` and `unmask` tables.
//!
//! [`MaskKind`] and [`UnmaskKind`] name every entry of the two tables. They
//! parse from and display as the entry key (`"cpf"`, `"phone"`, ...), which
//! makes them usable as configuration values.

use std::{fmt, str::FromStr};

use crate::{format, input::MaskInput, mask, unmask};

// =============================================================================
// ParseKindError
// =============================================================================

/// Error returned when a key names no table entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKindError {
    key: String,
    table: &'static str,
}

impl ParseKindError {
    /// The key that failed to parse.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} key `{}`", self.table, self.key)
    }
}

impl std::error::Error for ParseKindError {}

// =============================================================================
// MaskKind
// =============================================================================

/// An entry of the `mask` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MaskKind {
    /// [`format::accent`]
    Accent,
    /// [`format::capitalize`]
    Capitalize,
    /// [`format::datetime`]
    Datetime,
    /// [`format::name`]
    Name,
    /// [`format::search`]
    Search,
    /// [`mask::cnpj`]
    Cnpj,
    /// [`mask::cpf`]
    Cpf,
    /// [`mask::currency`]
    Currency,
    /// [`mask::date`]
    Date,
    /// [`mask::phone`]
    Phone,
    /// [`mask::time`]
    Time,
    /// [`mask::zipcode`]
    Zipcode,
}

impl MaskKind {
    /// Every entry, in table order.
    pub const ALL: [Self; 12] = [
        Self::Accent,
        Self::Capitalize,
        Self::Datetime,
        Self::Name,
        Self::Search,
        Self::Cnpj,
        Self::Cpf,
        Self::Currency,
        Self::Date,
        Self::Phone,
        Self::Time,
        Self::Zipcode,
    ];

    /// The table key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Capitalize => "capitalize",
            Self::Datetime => "datetime",
            Self::Name => "name",
            Self::Search => "search",
            Self::Cnpj => "cnpj",
            Self::Cpf => "cpf",
            Self::Currency => "currency",
            Self::Date => "date",
            Self::Phone => "phone",
            Self::Time => "time",
            Self::Zipcode => "zipcode",
        }
    }

    /// The inverse `unmask` entry, if there is one.
    ///
    /// Format-only entries (`accent`, `capitalize`, `datetime`, `name`,
    /// `search`) have no inverse.
    pub const fn unmask_kind(self) -> Option<UnmaskKind> {
        match self {
            Self::Accent | Self::Capitalize | Self::Datetime | Self::Name | Self::Search => None,
            Self::Cnpj => Some(UnmaskKind::Cnpj),
            Self::Cpf => Some(UnmaskKind::Cpf),
            Self::Currency => Some(UnmaskKind::Currency),
            Self::Date => Some(UnmaskKind::Date),
            Self::Phone => Some(UnmaskKind::Phone),
            Self::Time => Some(UnmaskKind::Time),
            Self::Zipcode => Some(UnmaskKind::Zipcode),
        }
    }

    /// Applies this entry to `value`.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn apply<I>(self, value: I) -> String
    where
        I: MaskInput,
    {
        match self {
            Self::Accent => format::accent(value),
            Self::Capitalize => format::capitalize(value),
            Self::Datetime => format::datetime(value),
            Self::Name => format::name(value),
            Self::Search => format::search(value),
            Self::Cnpj => mask::cnpj(value),
            Self::Cpf => mask::cpf(value),
            Self::Currency => mask::currency(value),
            Self::Date => mask::date(value),
            Self::Phone => mask::phone(value),
            Self::Time => mask::time(value),
            Self::Zipcode => mask::zipcode(value),
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MaskKind {
    type Err = ParseKindError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ParseKindError {
                key: key.to_string(),
                table: "mask",
            })
    }
}

// =============================================================================
// UnmaskKind
// =============================================================================

/// An entry of the `unmask` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum UnmaskKind {
    /// [`unmask::cnpj`]
    Cnpj,
    /// [`unmask::cpf`]
    Cpf,
    /// [`unmask::currency`]
    Currency,
    /// [`unmask::date`]
    Date,
    /// [`unmask::phone`]
    Phone,
    /// [`unmask::time`]
    Time,
    /// [`unmask::zipcode`]
    Zipcode,
}

impl UnmaskKind {
    /// Every entry, in table order.
    pub const ALL: [Self; 7] = [
        Self::Cnpj,
        Self::Cpf,
        Self::Currency,
        Self::Date,
        Self::Phone,
        Self::Time,
        Self::Zipcode,
    ];

    /// The table key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cnpj => "cnpj",
            Self::Cpf => "cpf",
            Self::Currency => "currency",
            Self::Date => "date",
            Self::Phone => "phone",
            Self::Time => "time",
            Self::Zipcode => "zipcode",
        }
    }

    /// The `mask` entry this one inverts.
    pub const fn mask_kind(self) -> MaskKind {
        match self {
            Self::Cnpj => MaskKind::Cnpj,
            Self::Cpf => MaskKind::Cpf,
            Self::Currency => MaskKind::Currency,
            Self::Date => MaskKind::Date,
            Self::Phone => MaskKind::Phone,
            Self::Time => MaskKind::Time,
            Self::Zipcode => MaskKind::Zipcode,
        }
    }

    /// Applies this entry to `value`.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn apply<I>(self, value: I) -> Unmasked
    where
        I: MaskInput,
    {
        match self {
            Self::Cnpj => Unmasked::Text(unmask::cnpj(value)),
            Self::Cpf => Unmasked::Text(unmask::cpf(value)),
            Self::Currency => unmask::currency(value).map_or(Unmasked::Absent, Unmasked::Number),
            Self::Date => Unmasked::Text(unmask::date(value)),
            Self::Phone => unmask::phone(value).map_or(Unmasked::Absent, Unmasked::Text),
            Self::Time => Unmasked::Text(unmask::time(value)),
            Self::Zipcode => Unmasked::Text(unmask::zipcode(value)),
        }
    }
}

impl fmt::Display for UnmaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for UnmaskKind {
    type Err = ParseKindError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ParseKindError {
                key: key.to_string(),
                table: "unmask",
            })
    }
}

// =============================================================================
// Unmasked
// =============================================================================

/// A canonical value produced by the `unmask` table.
#[derive(Clone, Debug, PartialEq)]
pub enum Unmasked {
    /// Digits, an ISO date, a time or a phone number.
    Text(String),
    /// A currency amount.
    Number(f64),
    /// Nothing could be recovered (no phone digits, no amount).
    Absent,
}

impl Unmasked {
    /// Returns the text, if this is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) | Self::Absent => None,
        }
    }

    /// Returns the number, if this is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) | Self::Absent => None,
        }
    }

    /// Returns `true` for [`Unmasked::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Renders text as-is, numbers in plain decimal form and `Absent` as nothing.
impl fmt::Display for Unmasked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Absent => Ok(()),
        }
    }
}
