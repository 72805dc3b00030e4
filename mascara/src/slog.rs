//! Adapters for emitting masked values through `slog`.
//!
//! Scalars are emitted as their masked text via [`MaskedRef`]. JSON payloads
//! are masked field by field and emitted as nested structured values.
//!
//! ```ignore
//! use mascara::{MaskKind, slog::SlogMaskedExt};
//!
//! info!(logger, "customer updated"; "cpf" => customer.cpf.slog_masked(MaskKind::Cpf));
//! ```

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    display::MaskedRef,
    input::MaskInput,
    json::mask_object,
    kind::{MaskKind, Unmasked},
};

/// Marker trait for types whose `slog` integration emits masked output.
///
/// Only wrappers that mask before logging implement it; raw inputs do not.
///
/// ```compile_fail
/// use mascara::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

impl<T: MaskInput + ?Sized> SlogValue for MaskedRef<'_, T> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.to_masked_string())
    }
}

impl<T: MaskInput + ?Sized> SlogMasked for MaskedRef<'_, T> {}

/// Canonical values are emitted with their natural type: text as a string,
/// amounts as `f64` and absent values as `None`.
impl SlogValue for Unmasked {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match self {
            Self::Text(text) => serializer.emit_str(key, text),
            Self::Number(number) => serializer.emit_f64(key, *number),
            Self::Absent => serializer.emit_none(key),
        }
    }
}

/// A JSON payload whose listed fields have already been masked.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedJson(JsonValue);

impl MaskedJson {
    /// Masks `fields` of `value` (see [`mask_object`]).
    pub fn new(value: JsonValue, fields: &[(&str, MaskKind)]) -> Self {
        Self(mask_object(value, fields))
    }

    /// The masked payload.
    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    /// Consumes the wrapper, returning the masked payload.
    pub fn into_value(self) -> JsonValue {
        self.0
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.0.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogMasked for MaskedJson {}

/// Extension trait for logging any [`MaskInput`] through a mask.
pub trait SlogMaskedExt: MaskInput {
    /// Wraps `self` so that `slog` receives the masked text.
    fn slog_masked(&self, kind: MaskKind) -> MaskedRef<'_, Self> {
        MaskedRef::new(self, kind)
    }
}

impl<T: MaskInput + ?Sized> SlogMaskedExt for T {}
