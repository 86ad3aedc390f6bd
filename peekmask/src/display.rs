//! Masked display formatting support.
//!
//! This module provides types for formatting masked strings:
//!
//! - [`Masked`]: Display wrapper that writes the masked form of a borrowed value
//! - [`MaskExt`]: Extension trait to obtain a [`Masked`] wrapper

use std::fmt;

use crate::policy::MaskConfig;

// =============================================================================
// Masked - Display wrapper for masked strings
// =============================================================================

/// Display wrapper that formats the masked form of a string-like value.
///
/// Both `Display` and `Debug` write the masked text. The raw value is never
/// formatted, so the wrapper is safe to hand to `format!` or logging macros.
pub struct Masked<'a, T: ?Sized> {
    value: &'a T,
    config: MaskConfig,
}

impl<T: ?Sized> Clone for Masked<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Masked<'_, T> {}

impl<'a, T: AsRef<str> + ?Sized> Masked<'a, T> {
    /// Wraps `value` so it formats using `config`.
    #[must_use]
    pub fn new(value: &'a T, config: MaskConfig) -> Self {
        Self { value, config }
    }

    /// Returns the configuration used for formatting.
    #[must_use]
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Returns the masked text as an owned string.
    #[must_use]
    pub fn masked(&self) -> String {
        self.config.apply_to(self.value.as_ref())
    }
}

impl<T: AsRef<str> + ?Sized> fmt::Display for Masked<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl<T: AsRef<str> + ?Sized> fmt::Debug for Masked<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.masked())
    }
}

// =============================================================================
// MaskExt - Extension trait for string-like values
// =============================================================================

/// Extension trait to obtain a masked display wrapper.
///
/// ```
/// use peekmask::{MaskConfig, MaskExt};
///
/// let account = String::from("1234567890");
/// assert_eq!(account.masked().to_string(), "12******90");
/// assert_eq!(
///     format!("{}", account.masked_with(MaskConfig::new('#', 0, 4, 0.3))),
///     "######7890"
/// );
/// ```
pub trait MaskExt {
    /// Wraps the value using [`MaskConfig::default`].
    fn masked(&self) -> Masked<'_, Self>;

    /// Wraps the value using an explicit configuration.
    fn masked_with(&self, config: MaskConfig) -> Masked<'_, Self>;
}

impl<T: AsRef<str> + ?Sized> MaskExt for T {
    fn masked(&self) -> Masked<'_, Self> {
        Masked::new(self, MaskConfig::default())
    }

    fn masked_with(&self, config: MaskConfig) -> Masked<'_, Self> {
        Masked::new(self, config)
    }
}
