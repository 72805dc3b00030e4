//! Masking and formatting helpers for Brazilian-locale data.
//!
//! This crate separates:
//! - **Engines**: the template mask engine (`to_mask`) and the date reformatter
//!   (`to_mask_date`), which every field-specific helper builds on.
//! - **Tables**: the [`mask`] and [`unmask`] modules, mirrored by the
//!   [`MaskKind`] and [`UnmaskKind`] enumerations for dispatch by field name.
//!
//! What this crate does:
//! - turns raw digits into display strings (CPF, CNPJ, phone, zipcode, dates)
//! - turns display strings back into canonical values
//! - normalizes names and free text for display or search
//! - provides integrations behind feature flags (e.g. `slog`, `tracing`)
//!
//! What it does not do:
//! - validate check digits or business rules
//! - perform I/O or logging on its own
//!
//! ```rust
//! use mascara::{MaskKind, mask, unmask};
//!
//! assert_eq!(mask::cpf("12345678901"), "123.456.789-01");
//! assert_eq!(unmask::cpf("123.456.789-01"), "12345678901");
//!
//! let kind: MaskKind = "phone".parse().unwrap();
//! assert_eq!(kind.apply("11987654321"), "(11) 98765-4321");
//! ```
//!
//! The `Masked` derive macro lives in `mascara-derive` and is re-exported from
//! this crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use mascara_derive::Masked;

#[allow(unused_extern_crates)]
extern crate self as mascara;

// Module declarations
mod display;
pub mod engine;
mod fields;
pub mod format;
mod input;
#[cfg(feature = "json")]
pub mod json;
mod kind;
pub mod mask;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod unmask;

// Re-exports
pub use display::{MaskedDisplayExt, MaskedRef};
pub use engine::{
    DATE_FALLBACK, DateOutput, DatePattern, PLACEHOLDER, ParseDateError, Template, only_numeric,
    parse_date, to_mask, to_mask_date,
};
pub use fields::{MaskApplicable, MaskFields};
pub use input::{MaskInput, Raw};
pub use kind::{MaskKind, ParseKindError, UnmaskKind, Unmasked};
