//! Shared numeric and formatting helpers.

pub mod format;
pub mod numeric;
