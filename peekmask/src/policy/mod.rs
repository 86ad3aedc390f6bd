//! Masking policy: configuration and the masking routine.
//!
//! - **Text masking** (`text`): [`MaskConfig`] and [`mask_with`], which decide
//!   which scalar values of a string stay visible and which are replaced by the
//!   mask character.
//!
//! # Example
//!
//! ```rust
//! use peekmask::MaskConfig;
//!
//! // The conventional default keeps two characters on each side
//! let config = MaskConfig::default();
//! assert_eq!(config.apply_to("1234567890"), "12******90");
//!
//! // Or build one explicitly
//! let custom = MaskConfig::new('■', 1, 1, 0.3);
//! assert_eq!(custom.apply_to("abcdef"), "a■■■■f");
//! ```

pub mod text;

pub use text::{
    DEFAULT_MIN_MASK_RATIO, DEFAULT_PREFIX_VISIBLE, DEFAULT_SUFFIX_VISIBLE, MASK_CHAR, MaskConfig,
    mask_with,
};
