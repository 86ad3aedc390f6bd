//! Partial masking of strings for display.
//!
//! This crate masks the middle of a string while keeping a configurable number of
//! leading and trailing characters visible, e.g. for showing account numbers,
//! email addresses, or identifiers in a redacted form.
//!
//! - counting is done on Unicode scalar values, so multi-byte characters are
//!   never split
//! - the output always has as many scalar values as the input
//! - when too little of a value would be hidden, the whole value is masked
//!
//! What it does not do:
//! - encrypt or hash values (masking is visual redaction only)
//! - segment grapheme clusters
//!
//! ```rust
//! use peekmask::{MaskConfig, mask};
//!
//! assert_eq!(mask("1234567890", 2, 2), "12******90");
//! assert_eq!(MaskConfig::new('■', 1, 1, 0.3).apply_to("abcdef"), "a■■■■f");
//! ```

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
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_const_for_fn
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod display;
pub mod policy;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use display::{MaskExt, Masked};
pub use policy::{
    DEFAULT_MIN_MASK_RATIO, DEFAULT_PREFIX_VISIBLE, DEFAULT_SUFFIX_VISIBLE, MASK_CHAR, MaskConfig,
    mask_with,
};
#[cfg(feature = "slog")]
pub use crate::slog::SlogMasked;
#[cfg(feature = "tracing")]
pub use crate::tracing::{TracingMasked, TracingMaskedExt};

/// Masks `value` with the default mask character and minimum ratio, keeping
/// `prefix_visible` leading and `suffix_visible` trailing characters.
///
/// ```rust
/// assert_eq!(peekmask::mask("メールアドレス", 2, 2), "メー***レス");
/// ```
#[must_use]
pub fn mask(value: &str, prefix_visible: usize, suffix_visible: usize) -> String {
    MaskConfig::default()
        .with_prefix_visible(prefix_visible)
        .with_suffix_visible(suffix_visible)
        .apply_to(value)
}
