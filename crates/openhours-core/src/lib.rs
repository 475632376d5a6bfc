//! Shared types, constants, errors and configuration for the opening hours crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
