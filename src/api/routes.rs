//! API Routes
//!
//! Configures the Axum router with the student directory endpoints.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{
    collection_method_not_allowed, create_student, delete_student, get_student,
    item_method_not_allowed, list_students, unmatched_path, update_student, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /students` - List all students
/// - `POST /students` - Create a student
/// - `GET /students/:id` - Fetch one student
/// - `PUT /students/:id` - Replace a student's fields
/// - `DELETE /students/:id` - Remove a student
///
/// Other methods on these paths answer 405, HEAD included. Any other path
/// under `/students/` has an invalid id and answers 400.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/students",
            get(list_students)
                .post(create_student)
                .head(collection_method_not_allowed)
                .fallback(collection_method_not_allowed),
        )
        .route(
            "/students/:id",
            get(get_student)
                .put(update_student)
                .delete(delete_student)
                .head(item_method_not_allowed)
                .fallback(item_method_not_allowed),
        )
        .fallback(unmatched_path)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
