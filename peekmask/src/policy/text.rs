//! Partial masking of string values.
//!
//! This module provides [`MaskConfig`] and the masking routine behind it. Masking
//! is a pure string transformation: it counts Unicode scalar values, never bytes,
//! and always returns a string with the same number of scalar values as its input.

/// Default character used to mask hidden characters.
pub const MASK_CHAR: char = '*';

/// Default number of leading characters left visible.
pub const DEFAULT_PREFIX_VISIBLE: usize = 2;

/// Default number of trailing characters left visible.
pub const DEFAULT_SUFFIX_VISIBLE: usize = 2;

/// Default minimum fraction of a value that must be masked.
pub const DEFAULT_MIN_MASK_RATIO: f64 = 0.3;

/// Configuration that keeps a prefix and a suffix visible while masking the middle.
///
/// The configuration carries no validity constraints: visible counts may be zero
/// or exceed the length of any value it is applied to, and the ratio is used as
/// given. Every combination has a defined result, see [`MaskConfig::apply_to`].
///
/// Use [`MaskConfig::new`] or [`MaskConfig::default`] to create instances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskConfig {
    /// Symbol substituted for each hidden character.
    mask_char: char,
    /// Number of leading characters to keep visible.
    prefix_visible: usize,
    /// Number of trailing characters to keep visible.
    suffix_visible: usize,
    /// Minimum masked fraction below which the whole value is masked.
    min_mask_ratio: f64,
}

impl MaskConfig {
    /// Constructs a configuration from explicit field values.
    #[must_use]
    pub fn new(
        mask_char: char,
        prefix_visible: usize,
        suffix_visible: usize,
        min_mask_ratio: f64,
    ) -> Self {
        Self {
            mask_char,
            prefix_visible,
            suffix_visible,
            min_mask_ratio,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Keeps the first `prefix_visible` scalar values in clear text.
    #[must_use]
    pub fn with_prefix_visible(mut self, prefix_visible: usize) -> Self {
        self.prefix_visible = prefix_visible;
        self
    }

    /// Keeps the last `suffix_visible` scalar values in clear text.
    #[must_use]
    pub fn with_suffix_visible(mut self, suffix_visible: usize) -> Self {
        self.suffix_visible = suffix_visible;
        self
    }

    /// Sets the minimum masked fraction.
    #[must_use]
    pub fn with_min_mask_ratio(mut self, min_mask_ratio: f64) -> Self {
        self.min_mask_ratio = min_mask_ratio;
        self
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    pub fn prefix_visible(&self) -> usize {
        self.prefix_visible
    }

    pub fn suffix_visible(&self) -> usize {
        self.suffix_visible
    }

    pub fn min_mask_ratio(&self) -> f64 {
        self.min_mask_ratio
    }

    /// Applies the configuration to a string value.
    ///
    /// Rules are checked in order:
    ///
    /// 1. An empty value is returned unchanged.
    /// 2. If `prefix_visible + suffix_visible >= length`, every character is masked.
    /// 3. If the masked fraction `(length - prefix - suffix) / length` is below
    ///    `min_mask_ratio`, every character is masked. The comparison is strict.
    /// 4. Otherwise the prefix and suffix are kept and the middle is masked.
    ///
    /// This method is total (it does not return errors).
    ///
    /// # Example
    /// ```
    /// use peekmask::MaskConfig;
    ///
    /// let config = MaskConfig::new('*', 2, 2, 0.3);
    /// assert_eq!(config.apply_to("1234567890"), "12******90");
    /// assert_eq!(config.apply_to("abc"), "***");
    /// ```
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let total = value.chars().count();
        if total == 0 {
            return String::new();
        }

        // Visible windows meet or overlap
        if self.prefix_visible.saturating_add(self.suffix_visible) >= total {
            return self.full_mask(total);
        }

        let masked = total - self.prefix_visible - self.suffix_visible;
        if mask_ratio(masked, total) < self.min_mask_ratio {
            return self.full_mask(total);
        }

        let suffix_start = total - self.suffix_visible;
        value
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                if index < self.prefix_visible || index >= suffix_start {
                    ch
                } else {
                    self.mask_char
                }
            })
            .collect()
    }

    fn full_mask(&self, total: usize) -> String {
        std::iter::repeat_n(self.mask_char, total).collect()
    }
}

impl std::default::Default for MaskConfig {
    /// `'*'` mask, two visible characters on each side, minimum ratio `0.3`.
    fn default() -> Self {
        Self::new(
            MASK_CHAR,
            DEFAULT_PREFIX_VISIBLE,
            DEFAULT_SUFFIX_VISIBLE,
            DEFAULT_MIN_MASK_RATIO,
        )
    }
}

/// Masks `value` using `config`.
///
/// Equivalent to [`MaskConfig::apply_to`].
#[must_use]
pub fn mask_with(value: &str, config: &MaskConfig) -> String {
    config.apply_to(value)
}

#[allow(clippy::cast_precision_loss)] // Lengths beyond 2^52 scalar values are not a concern
fn mask_ratio(masked: usize, total: usize) -> f64 {
    masked as f64 / total as f64
}
