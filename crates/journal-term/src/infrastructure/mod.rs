//! Infrastructure layer providing entry storage.
//!
//! This module contains the implementations of the `EntryStore` capability:
//! a directory of date-named journal files and a fixed set of in-memory notes.

pub mod stores;
