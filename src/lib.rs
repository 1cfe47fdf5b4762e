//! Pet Age Engine
//!
//! This crate converts a dog's or cat's age into an equivalent human age
//! using per-size lookup tables, with linear interpolation between table
//! entries and linear extrapolation past the end of a table.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
