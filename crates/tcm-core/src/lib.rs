//! tcm-core
//!
//! Pure domain types for the TCM clinical decision support core.
//! Typed raw-input models (observation, interrogation, chief complaint),
//! inference output records, and field-access helpers — the shared
//! vocabulary of the system. No inference logic lives here.

pub mod error;
pub mod fields;
pub mod models;
