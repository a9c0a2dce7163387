//! Core domain types for Parlour.
//!
//! This crate contains pure domain types with no IO, no randomness, and minimal
//! dependencies. The game loops in `parlour-core` are built on top of these.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod answers;
mod rules;

pub use answers::{ANSWERS, NonEmptyStaticStr};
pub use rules::{AttemptLimit, GuessRange, GuessRules, RulesError, Verdict};
