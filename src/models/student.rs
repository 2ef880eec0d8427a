//! Student record
//!
//! The single entity held by the directory. The same shape is used for
//! stored records and for every JSON response body.

use serde::{Deserialize, Serialize};

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Server-assigned identifier, immutable after creation
    pub id: i64,
    pub name: String,
    pub faculty: String,
    pub gender: String,
}

/// The mutable part of a student: everything except the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentProfile {
    pub name: String,
    pub faculty: String,
    pub gender: String,
}

impl StudentProfile {
    /// Creates a new StudentProfile
    pub fn new(
        name: impl Into<String>,
        faculty: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            faculty: faculty.into(),
            gender: gender.into(),
        }
    }
}

impl Student {
    /// Builds a record from an assigned id and its profile fields.
    pub fn with_profile(id: i64, profile: StudentProfile) -> Self {
        Self {
            id,
            name: profile.name,
            faculty: profile.faculty,
            gender: profile.gender,
        }
    }

    /// Overwrites name, faculty and gender. The id is left untouched.
    pub fn apply(&mut self, profile: StudentProfile) {
        self.name = profile.name;
        self.faculty = profile.faculty;
        self.gender = profile.gender;
    }
}
