//! Masking engines: template overlay and date reformatting.
//!
//! This module provides:
//!
//! - **Templates** (`template`): [`Template`], [`to_mask`] and [`only_numeric`],
//!   which lay the digits of a value over a fixed pattern.
//!
//! - **Dates** (`date`): [`to_mask_date`], [`parse_date`] and [`DatePattern`],
//!   which move dates between display order and ISO order.
//!
//! # Example
//!
//! ```rust
//! use mascara::{Template, to_mask, to_mask_date};
//!
//! assert_eq!(to_mask("01310100", "_____-___"), "01310-100");
//! assert_eq!(Template::TIME.apply("0930"), "09:30");
//! assert_eq!(to_mask_date("2023-10-05", "DD/MM/YYYY"), "05/10/2023");
//! ```

pub mod date;
pub mod template;

pub use date::{
    DATE_FALLBACK, DateOutput, DatePattern, ParseDateError, parse_date, parse_datetime,
    to_mask_date,
};
pub use template::{PLACEHOLDER, Template, only_numeric, to_mask};
