//! Core types for Tour of Schools

use serde::{Deserialize, Serialize};

/// A school record as stored by the backend.
///
/// The id is server-assigned and immutable after creation; the name is
/// mutable and expected to be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
}

impl School {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for School {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// Creation payload: a school before the backend has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
}

impl NewSchool {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
