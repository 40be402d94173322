//! Subject model.
//!
//! A subject is an opaque curriculum identifier ("Mathematics", "CS-101").
//! Equality, ordering, and hashing are by value, so subjects can live in
//! ordered sets and produce deterministic output.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A curriculum subject identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    /// Creates a subject from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The subject name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Subject {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Subject {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Subject {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_subject_equality_by_value() {
        assert_eq!(Subject::new("Math"), Subject::from("Math"));
        assert_ne!(Subject::new("Math"), Subject::new("math"));
    }

    #[test]
    fn test_subject_set_lookup_by_str() {
        let set: BTreeSet<Subject> = ["Physics", "Math"].into_iter().map(Subject::from).collect();
        assert!(set.contains("Math"));
        assert!(!set.contains("Biology"));
        // Ordered by name
        let names: Vec<&str> = set.iter().map(Subject::as_str).collect();
        assert_eq!(names, vec!["Math", "Physics"]);
    }

    #[test]
    fn test_subject_serializes_as_string() {
        let json = serde_json::to_string(&Subject::new("Chemistry")).unwrap();
        assert_eq!(json, "\"Chemistry\"");
        let back: Subject = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "Chemistry");
    }
}
