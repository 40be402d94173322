//! Teacher model.
//!
//! Teachers are the candidates the scheduler chooses from. Each has a
//! set of subjects it is able to teach and an age, which breaks ties
//! between teachers covering the same number of subjects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Subject;

/// A candidate educator.
///
/// Teachers are immutable input to scheduling. What a teacher ends up
/// teaching is recorded in the returned [`Schedule`](super::Schedule),
/// never on the teacher itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Age in years. Lower is preferred when coverage ties.
    #[serde(default)]
    pub age: u32,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Subjects this teacher is capable of teaching.
    #[serde(default)]
    pub teachable: BTreeSet<Subject>,
}

impl Teacher {
    /// Creates a teacher with the given ID and no subjects.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            age: 0,
            email: String::new(),
            teachable: BTreeSet::new(),
        }
    }

    /// Sets first and last name.
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the age.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Adds a teachable subject.
    pub fn with_subject(mut self, subject: impl Into<Subject>) -> Self {
        self.teachable.insert(subject.into());
        self
    }

    /// Adds several teachable subjects.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Subject>,
    {
        self.teachable.extend(subjects.into_iter().map(Into::into));
        self
    }

    /// "First Last", trimmed when either part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Whether this teacher can teach the given subject.
    pub fn can_teach(&self, subject: &str) -> bool {
        self.teachable.contains(subject)
    }

    /// Subjects from `uncovered` this teacher could take on.
    pub fn coverage(&self, uncovered: &BTreeSet<Subject>) -> BTreeSet<Subject> {
        self.teachable.intersection(uncovered).cloned().collect()
    }
}
