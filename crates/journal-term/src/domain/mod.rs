//! Core domain logic for the journal interface.
//!
//! This module contains the entry model, the focus/mode state machine and the
//! panels that drive the terminal UI, independent of where entries are stored.

pub mod models;
pub mod services;
