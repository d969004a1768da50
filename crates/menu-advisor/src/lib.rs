//! Preference matching and scoring engine for digitized restaurant menus.
//!
//! Dish records arrive already extracted, translated, and enriched; this crate ranks them
//! against a diner's preference profile and explains the winning choice.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
