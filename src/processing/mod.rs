//! Address processing logic.
//!
//! This module contains the operations built on the models:
//! - [`classify`] - private/reserved classification
//! - [`anonymize`] - anonymization and display masking
//! - [`decimal`] - decimal integer conversion
//! - [`matcher`] - pattern-list and wildcard matching

mod anonymize;
mod classify;
mod decimal;
mod matcher;

// Re-export public functions
pub use anonymize::{anonymize, is_anonymized, mask_display, V4_MASK, V6_MASK};
pub use classify::{is_private, is_public, non_public_block};
pub use decimal::{address_from_decimal, address_to_decimal, from_decimal, to_decimal};
pub use matcher::{matches, wildcard_match};
