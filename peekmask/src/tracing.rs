//! Adapters for emitting masked values through `tracing`.
//!
//! Values are logged as display strings, which works with any tracing subscriber.
//!
//! # Example
//!
//! ```ignore
//! use peekmask::tracing::TracingMaskedExt;
//!
//! tracing::info!(account = %account_id.tracing_masked());
//! ```

use tracing::field::{DisplayValue, display};

use crate::{display::Masked, policy::MaskConfig};

/// Marker trait for types whose `tracing` integration always emits masked output.
///
/// This trait is implemented only for wrappers that mask before logging. It is
/// not a blanket impl for raw types.
pub trait TracingMasked {}

impl<T> TracingMasked for Masked<'_, T> where T: AsRef<str> + ?Sized {}

/// Extension trait for logging masked values as display strings.
pub trait TracingMaskedExt {
    /// Masks the value with [`MaskConfig::default`] for `tracing` logging.
    fn tracing_masked(&self) -> DisplayValue<String> {
        self.tracing_masked_with(MaskConfig::default())
    }

    /// Masks the value with an explicit configuration for `tracing` logging.
    ///
    /// Only the masked text is stored in the returned value.
    fn tracing_masked_with(&self, config: MaskConfig) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn tracing_masked_with(&self, config: MaskConfig) -> DisplayValue<String> {
        display(config.apply_to(self.as_ref()))
    }
}
