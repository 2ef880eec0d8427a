//! API Module
//!
//! HTTP handlers and routing for the student directory REST API.
//!
//! # Endpoints
//! - `GET /students` - List all students
//! - `POST /students` - Create a student
//! - `GET /students/:id` - Fetch one student
//! - `PUT /students/:id` - Replace a student's fields
//! - `DELETE /students/:id` - Remove a student

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
