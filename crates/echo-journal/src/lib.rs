//! # echo-journal
//!
//! Persistence and service layer for the echo journal.
//!
//! This crate provides:
//! - [`MemoryJournalStore`] and [`FileJournalStore`] repositories
//! - [`JournalService`]: validates submissions, runs the AI pipeline,
//!   persists records, and builds insights

pub mod service;
pub mod store;

pub use service::JournalService;
pub use store::{FileJournalStore, MemoryJournalStore};
