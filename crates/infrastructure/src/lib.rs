//! Ferrous Stub Infrastructure Layer
pub mod dns;
