//! API Handlers
//!
//! HTTP request handlers for the student collection and single-student endpoints.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::directory::StudentStore;
use crate::error::{DirectoryError, Result};
use crate::models::{Student, StudentRequest};

/// Application state shared across all handlers.
///
/// One mutex guards the record list and the id counter together.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe student store
    pub store: Arc<Mutex<StudentStore>>,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: StudentStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StudentStore::new())
    }
}

/// Parses the `{id}` path segment as a base-10 integer.
pub fn parse_student_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| DirectoryError::InvalidId(raw.to_string()))
}

/// Student id taken from the `:id` path segment.
///
/// Undecodable segments and non-integers both reject with `InvalidId`, so
/// the caller only ever sees a bare 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = DirectoryError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| DirectoryError::InvalidId(e.body_text()))?;

        parse_student_id(&raw_id).map(StudentId)
    }
}

/// Handler for GET /students
///
/// Returns every student in insertion order, `[]` when empty.
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    // Copy under the lock, serialize after release
    let students = state.store.lock().await.list();
    Json(students)
}

/// Handler for POST /students
///
/// The body is parsed before the lock is taken; any `id` in it is ignored.
pub async fn create_student(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Student>)> {
    let profile = StudentRequest::from_body(&body)?.into_profile();

    let student = state.store.lock().await.create(profile);

    Ok((StatusCode::CREATED, Json(student)))
}

/// Handler for GET /students/:id
pub async fn get_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<Json<Student>> {
    let student = state.store.lock().await.get(id)?;

    Ok(Json(student))
}

/// Handler for PUT /students/:id
///
/// Replaces name, faculty and gender. The path id wins over any body id.
pub async fn update_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
    body: Bytes,
) -> Result<Json<Student>> {
    let profile = StudentRequest::from_body(&body)?.into_profile();

    let student = state.store.lock().await.update(id, profile)?;

    Ok(Json(student))
}

/// Handler for DELETE /students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<StatusCode> {
    state.store.lock().await.delete(id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unhandled methods on /students
pub async fn collection_method_not_allowed(method: Method) -> DirectoryError {
    DirectoryError::MethodNotAllowed(method.to_string())
}

/// Fallback for unhandled methods on /students/:id
///
/// The id extractor runs first, so a bad id reports 400 over 405.
pub async fn item_method_not_allowed(_id: StudentId, method: Method) -> DirectoryError {
    DirectoryError::MethodNotAllowed(method.to_string())
}

/// Router fallback.
///
/// Anything under `/students/` that `:id` did not match (empty, trailing
/// slash, extra segments) is an invalid id. Other paths are plain 404s.
pub async fn unmatched_path(uri: Uri) -> Response {
    match uri.path().strip_prefix("/students/") {
        Some(rest) => DirectoryError::InvalidId(rest.to_string()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
