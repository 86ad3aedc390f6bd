//! `serde::Serialize` support for masked values.
//!
//! [`Masked`] serializes as a plain string holding the masked text. The raw
//! value is never handed to the serializer.

use serde::{Serialize, Serializer};

use crate::display::Masked;

impl<T> Serialize for Masked<'_, T>
where
    T: AsRef<str> + ?Sized,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.masked())
    }
}
