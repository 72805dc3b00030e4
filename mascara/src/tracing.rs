//! Adapters for emitting masked values through `tracing`.
//!
//! ```ignore
//! use mascara::{MaskKind, tracing::TracingMaskedExt};
//!
//! tracing::info!(phone = %customer.phone.tracing_masked(MaskKind::Phone), "customer updated");
//! ```

use tracing::field::{DisplayValue, display};

use crate::{display::MaskedRef, input::MaskInput, kind::MaskKind};

/// Marker trait for types whose `tracing` integration emits masked output.
///
/// Only wrappers that mask before logging implement it; raw inputs do not.
pub trait TracingMasked {}

impl<T: MaskInput + ?Sized> TracingMasked for MaskedRef<'_, T> {}

/// Extension trait for recording any [`MaskInput`] as a masked display value.
pub trait TracingMaskedExt {
    /// Masks the value with `kind` and wraps the text for `tracing`.
    fn tracing_masked(&self, kind: MaskKind) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: MaskInput + ?Sized,
{
    fn tracing_masked(&self, kind: MaskKind) -> DisplayValue<String> {
        display(kind.apply(self))
    }
}
