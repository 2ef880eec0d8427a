//! Student Store Module
//!
//! Ordered record storage with a monotonic id counter. Lookups are linear
//! scans; callers hold the store's lock for the whole operation.

use tracing::debug;

use crate::directory::FIRST_STUDENT_ID;
use crate::error::{DirectoryError, Result};
use crate::models::{Student, StudentProfile};

// == Student Store ==
/// In-memory student storage.
///
/// Invariant: ids are pairwise distinct and all lie in `[1, next_id)`.
#[derive(Debug)]
pub struct StudentStore {
    /// Records in insertion order
    students: Vec<Student>,
    /// Id handed to the next created record, never reused
    next_id: i64,
}

impl StudentStore {
    // == Constructor ==
    /// Creates an empty store whose first record will get id 1.
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: FIRST_STUDENT_ID,
        }
    }

    // == List ==
    /// Returns a copy of every record in insertion order.
    pub fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    // == Create ==
    /// Assigns the next id, appends the record and returns it.
    pub fn create(&mut self, profile: StudentProfile) -> Student {
        let student = Student::with_profile(self.next_id, profile);
        self.next_id += 1;
        self.students.push(student.clone());

        debug!("Created student {}", student.id);
        student
    }

    // == Get ==
    /// Returns the first record with the given id.
    pub fn get(&self, id: i64) -> Result<Student> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound(id))
    }

    // == Update ==
    /// Replaces name, faculty and gender of the matching record in place.
    ///
    /// Nothing is mutated when the id is unknown.
    pub fn update(&mut self, id: i64, profile: StudentProfile) -> Result<Student> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DirectoryError::NotFound(id))?;
        student.apply(profile);

        debug!("Updated student {}", id);
        Ok(student.clone())
    }

    // == Delete ==
    /// Removes the matching record, keeping the order of the rest.
    pub fn delete(&mut self, id: i64) -> Result<Student> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(DirectoryError::NotFound(id))?;

        debug!("Deleted student {}", id);
        Ok(self.students.remove(index))
    }

    // == Accessors ==
    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns true when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Id the next created record will receive.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}
