//! motus-core
//!
//! Pure domain types and progress arithmetic for the Motus rehabilitation
//! dashboard. No storage or rendering dependency — this is the shared
//! vocabulary of the Motus system.

pub mod error;
pub mod models;
