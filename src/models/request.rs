//! Coverage request model.
//!
//! Bundles the required curriculum with the ordered candidate list.
//! Candidate order matters: ties are broken against the running best
//! in iteration order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Subject, Teacher};

/// Input container for coverage scheduling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRequest {
    /// Subjects that must be covered.
    #[serde(default)]
    pub subjects: BTreeSet<Subject>,
    /// Candidate teachers in iteration order.
    #[serde(default)]
    pub teachers: Vec<Teacher>,
}

impl CoverageRequest {
    /// Creates a request from required subjects and candidates.
    pub fn new(subjects: BTreeSet<Subject>, teachers: Vec<Teacher>) -> Self {
        Self { subjects, teachers }
    }

    /// Adds a required subject.
    pub fn with_subject(mut self, subject: impl Into<Subject>) -> Self {
        self.subjects.insert(subject.into());
        self
    }

    /// Appends a candidate teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Looks up a candidate by ID.
    pub fn teacher(&self, teacher_id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == teacher_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = CoverageRequest::default()
            .with_subject("Math")
            .with_subject("Math")
            .with_subject("Art")
            .with_teacher(Teacher::new("A").with_subject("Math"))
            .with_teacher(Teacher::new("B").with_subject("Art"));

        assert_eq!(req.subjects.len(), 2);
        assert_eq!(req.teachers.len(), 2);
        assert!(req.teacher("B").unwrap().can_teach("Art"));
        assert!(req.teacher("C").is_none());
    }

    #[test]
    fn test_request_from_toml() {
        let src = r#"
            subjects = ["Math", "Physics"]

            [[teachers]]
            id = "A"
            first_name = "Ada"
            age = 40
            teachable = ["Math", "Physics"]
        "#;
        let req: CoverageRequest = toml::from_str(src).unwrap();
        assert_eq!(req.subjects.len(), 2);
        assert_eq!(req.teachers[0].first_name, "Ada");
        assert_eq!(req.teachers[0].age, 40);
    }
}
