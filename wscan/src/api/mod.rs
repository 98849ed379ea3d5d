//! Public API module.
//!
//! This module contains the high-level user-facing API for the `wscan` crate.

pub mod models;
pub mod palette;
pub mod scanner;
pub mod source;
