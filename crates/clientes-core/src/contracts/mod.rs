//! Transport contract constants.
//!
//! String constants for API routes shared by the HTTP adapter and its
//! tests. Keep these string-only with no framework-specific types.

pub mod http;
