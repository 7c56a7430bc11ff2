//! Certificate transparency search service utilities.
//!
//! Keeps knowledge of the crt.sh query format in one place.

pub mod endpoint;
