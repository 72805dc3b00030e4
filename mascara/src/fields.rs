//! Field-level masking for structured data.
//!
//! - [`MaskApplicable`]: how a single field value is masked or unmasked
//! - [`MaskFields`]: how a whole struct is walked (usually derived with
//!   `#[derive(Masked)]`)
//!
//! ```rust
//! use mascara::{MaskFields, Masked};
//! # // Inside the mascara package the derive resolves its root as `crate`.
//! # use mascara::{MaskApplicable, MaskKind};
//! # fn main() {
//!
//! #[derive(Masked)]
//! struct Customer {
//!     #[mask(name)]
//!     name: String,
//!     #[mask(cpf)]
//!     cpf: String,
//!     #[mask(phone)]
//!     phone: Option<String>,
//!     id: u64,
//! }
//!
//! let customer = Customer {
//!     name: "MARIA DA SILVA".into(),
//!     cpf: "12345678901".into(),
//!     phone: Some("11987654321".into()),
//!     id: 7,
//! }
//! .mask_fields();
//!
//! assert_eq!(customer.name, "Maria da Silva");
//! assert_eq!(customer.cpf, "123.456.789-01");
//! assert_eq!(customer.phone.as_deref(), Some("(11) 98765-4321"));
//! assert_eq!(customer.id, 7);
//! # }
//! ```

use crate::kind::MaskKind;

/// A value that a [`MaskKind`] can be applied to in place of itself.
///
/// Implemented for `String` and, recursively, for `Option<T>`, `Vec<T>` and
/// `Box<T>`.
pub trait MaskApplicable: Sized {
    /// Returns the masked value.
    #[must_use]
    fn apply_mask(self, kind: MaskKind) -> Self;

    /// Returns the canonical value.
    ///
    /// Kinds with no inverse leave the value unchanged. Absent results (no phone
    /// digits, no amount) become empty text.
    #[must_use]
    fn apply_unmask(self, kind: MaskKind) -> Self;
}

impl MaskApplicable for String {
    fn apply_mask(self, kind: MaskKind) -> Self {
        kind.apply(&self)
    }

    fn apply_unmask(self, kind: MaskKind) -> Self {
        match kind.unmask_kind() {
            Some(inverse) => inverse.apply(&self).to_string(),
            None => self,
        }
    }
}

impl<T: MaskApplicable> MaskApplicable for Option<T> {
    fn apply_mask(self, kind: MaskKind) -> Self {
        self.map(|value| value.apply_mask(kind))
    }

    fn apply_unmask(self, kind: MaskKind) -> Self {
        self.map(|value| value.apply_unmask(kind))
    }
}

impl<T: MaskApplicable> MaskApplicable for Vec<T> {
    fn apply_mask(self, kind: MaskKind) -> Self {
        self.into_iter().map(|value| value.apply_mask(kind)).collect()
    }

    fn apply_unmask(self, kind: MaskKind) -> Self {
        self.into_iter()
            .map(|value| value.apply_unmask(kind))
            .collect()
    }
}

impl<T: MaskApplicable> MaskApplicable for Box<T> {
    fn apply_mask(self, kind: MaskKind) -> Self {
        Box::new((*self).apply_mask(kind))
    }

    fn apply_unmask(self, kind: MaskKind) -> Self {
        Box::new((*self).apply_unmask(kind))
    }
}

/// A struct whose annotated fields can be masked and unmasked together.
///
/// Derive it with `#[derive(Masked)]`; see the module docs.
pub trait MaskFields: Sized {
    /// Masks every annotated field.
    #[must_use]
    fn mask_fields(self) -> Self;

    /// Unmasks every annotated field.
    #[must_use]
    fn unmask_fields(self) -> Self;
}

impl<T: MaskFields> MaskFields for Option<T> {
    fn mask_fields(self) -> Self {
        self.map(MaskFields::mask_fields)
    }

    fn unmask_fields(self) -> Self {
        self.map(MaskFields::unmask_fields)
    }
}

impl<T: MaskFields> MaskFields for Vec<T> {
    fn mask_fields(self) -> Self {
        self.into_iter().map(MaskFields::mask_fields).collect()
    }

    fn unmask_fields(self) -> Self {
        self.into_iter().map(MaskFields::unmask_fields).collect()
    }
}

impl<T: MaskFields> MaskFields for Box<T> {
    fn mask_fields(self) -> Self {
        Box::new((*self).mask_fields())
    }

    fn unmask_fields(self) -> Self {
        Box::new((*self).unmask_fields())
    }
}
