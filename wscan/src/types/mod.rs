//! Type definitions and constants.
//!
//! This module contains radio constants, NetworkManager codes and the
//! access point flag words.

pub(crate) mod constants;
pub mod flags;
