//! Request and Response models for the student directory API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod student;

// Re-export commonly used types
pub use requests::StudentRequest;
pub use student::{Student, StudentProfile};
