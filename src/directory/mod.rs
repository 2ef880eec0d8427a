//! Directory Module
//!
//! In-memory student store: an ordered list of records plus the id counter.

mod store;


pub use store::StudentStore;

/// First id handed out by a fresh store.
pub const FIRST_STUDENT_ID: i64 = 1;
