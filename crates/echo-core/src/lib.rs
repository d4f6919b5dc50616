//! # echo-core
//!
//! Core types, traits, and abstractions for the echo journal.
//!
//! This crate provides the domain types shared by every echo crate (moods,
//! journal records, insights reports), the error taxonomy, and the trait seams
//! for the AI gateway and the journal storage collaborator.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{AiError, AiResult, Error, Result};
pub use models::*;
pub use traits::*;
