//! Adapters for emitting masked values through `slog`.
//!
//! This module provides a `slog::Value` implementation for [`Masked`] so masked
//! strings can be used directly as key-value pairs:
//!
//! ```ignore
//! use peekmask::MaskExt;
//!
//! info!(logger, "login"; "account" => account_id.masked());
//! ```
//!
//! The emitted value is always derived from the masked text, never the original.
//! It does not configure `slog`.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::display::Masked;

/// Marker trait for types whose `slog` integration always emits masked output.
///
/// This trait is implemented only for wrappers that mask before logging. It is
/// not a blanket impl for raw types.
///
/// ```compile_fail
/// use peekmask::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

impl<T> SlogValue for Masked<'_, T>
where
    T: AsRef<str> + ?Sized,
{
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.masked())
    }
}

impl<T> SlogMasked for Masked<'_, T> where T: AsRef<str> + ?Sized {}
