//! Student Directory - A minimal in-memory student records service
//!
//! CRUD over HTTP for student records held in one mutex-guarded list.

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use config::Config;
