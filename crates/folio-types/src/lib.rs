//! Foundation types for folio.
//!
//! Platform-agnostic types shared by the terminal core and its hosts:
//! input events, configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
