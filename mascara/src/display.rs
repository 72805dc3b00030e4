//! Masked display formatting support.
//!
//! This module provides types for masking at formatting time:
//!
//! - [`MaskedRef`]: Display wrapper that masks a borrowed value when formatted
//! - [`MaskedDisplayExt`]: Extension trait that creates the wrapper

use std::fmt;

use crate::{input::MaskInput, kind::MaskKind};

// =============================================================================
// MaskedRef - Display wrapper for masked values
// =============================================================================

/// Display wrapper that renders a borrowed value through a [`MaskKind`].
///
/// `Debug` renders the same masked text, so the raw value never reaches logs
/// through either trait.
pub struct MaskedRef<'a, T: ?Sized> {
    value: &'a T,
    kind: MaskKind,
}

impl<'a, T: MaskInput + ?Sized> MaskedRef<'a, T> {
    /// Wraps `value` for masking with `kind`.
    pub fn new(value: &'a T, kind: MaskKind) -> Self {
        Self { value, kind }
    }

    /// The mask applied when formatting.
    pub fn kind(&self) -> MaskKind {
        self.kind
    }

    /// Produces the masked text.
    pub fn to_masked_string(&self) -> String {
        self.kind.apply(self.value)
    }
}

impl<T: MaskInput + ?Sized> fmt::Display for MaskedRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_masked_string())
    }
}

impl<T: MaskInput + ?Sized> fmt::Debug for MaskedRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_masked_string(), f)
    }
}

// =============================================================================
// MaskedDisplayExt - Extension trait
// =============================================================================

/// Extension trait for masking any [`MaskInput`] at display time.
///
/// ```rust
/// use mascara::{MaskKind, MaskedDisplayExt};
///
/// let cpf = "12345678901";
/// assert_eq!(format!("cpf={}", cpf.masked(MaskKind::Cpf)), "cpf=123.456.789-01");
/// ```
pub trait MaskedDisplayExt: MaskInput {
    /// Wraps `self` so that formatting renders the masked text.
    fn masked(&self, kind: MaskKind) -> MaskedRef<'_, Self> {
        MaskedRef::new(self, kind)
    }
}

impl<T: MaskInput + ?Sized> MaskedDisplayExt for T {}
