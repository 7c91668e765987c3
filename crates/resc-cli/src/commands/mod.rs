//! Command implementations for the resc CLI.

/// Delete all cache entries
pub mod clear;
/// Print a channel's gain factor
pub mod gain;
/// Resolve a resource identifier
pub mod get;
/// Show cache statistics
pub mod info;
