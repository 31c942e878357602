//! Configuration management for the terminal interface.
//!
//! This module provides centralized handling of the journal location, store
//! selection and the immutable render settings derived from them.

mod config;
mod ui_config;

pub use config::*;
pub use ui_config::*;
