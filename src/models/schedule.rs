//! Schedule (solution) model.
//!
//! A schedule lists the selected teachers in selection order together
//! with the subjects each one was assigned. It can also be viewed as a
//! mapping from teacher ID to assigned subjects.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{Subject, Teacher};

/// A coverage schedule (solution to a staffing problem).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Teacher assignments in selection order.
    pub assignments: Vec<Assignment>,
}

/// The subjects one selected teacher is assigned to teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Selected teacher ID.
    pub teacher_id: String,
    /// Position of the teacher in the candidate list.
    pub candidate_index: usize,
    /// Assigned subjects (a subset of the teacher's teachable set).
    pub subjects: BTreeSet<Subject>,
}

/// A schedule defect found by [`validate_schedule`](crate::validation::validate_schedule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (teacher ID or subject).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A required subject is not assigned to anyone.
    MissingSubject,
    /// A subject is assigned to more than one teacher.
    DuplicateSubject,
    /// A teacher is assigned a subject outside its teachable set.
    NotTeachable,
    /// An assignment refers to a teacher that is not a candidate.
    UnknownTeacher,
    /// The same teacher was selected more than once.
    RepeatedTeacher,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        teacher_id: impl Into<String>,
        candidate_index: usize,
        subjects: BTreeSet<Subject>,
    ) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            candidate_index,
            subjects,
        }
    }

    /// Number of assigned subjects.
    #[inline]
    pub fn load(&self) -> usize {
        self.subjects.len()
    }

    /// Finds the assigned teacher among `candidates`, with its position.
    ///
    /// Prefers `candidate_index` when the ID there matches, so candidates
    /// sharing an ID resolve to the record that was actually selected.
    /// Falls back to the first candidate with a matching ID.
    pub fn resolve<'a>(&self, candidates: &'a [Teacher]) -> Option<(usize, &'a Teacher)> {
        candidates
            .get(self.candidate_index)
            .filter(|t| t.id == self.teacher_id)
            .map(|t| (self.candidate_index, t))
            .or_else(|| {
                candidates
                    .iter()
                    .enumerate()
                    .find(|(_, t)| t.id == self.teacher_id)
            })
    }
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }

    /// A required subject left unassigned.
    pub fn missing_subject(subject: &Subject) -> Self {
        Self::new(
            ViolationType::MissingSubject,
            subject.as_str(),
            format!("Subject '{subject}' is not assigned to any teacher"),
        )
    }

    /// A subject assigned twice.
    pub fn duplicate_subject(subject: &Subject, teacher_id: &str) -> Self {
        Self::new(
            ViolationType::DuplicateSubject,
            subject.as_str(),
            format!("Subject '{subject}' is assigned again to teacher '{teacher_id}'"),
        )
    }

    /// A subject the teacher cannot teach.
    pub fn not_teachable(teacher_id: &str, subject: &Subject) -> Self {
        Self::new(
            ViolationType::NotTeachable,
            teacher_id,
            format!("Teacher '{teacher_id}' cannot teach '{subject}'"),
        )
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Whether no teacher was selected.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of selected teachers.
    pub fn teacher_count(&self) -> usize {
        self.assignments.len()
    }

    /// Selected teacher IDs in selection order.
    pub fn teacher_ids(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .map(|a| a.teacher_id.as_str())
            .collect()
    }

    /// Finds the assignment for a given teacher.
    pub fn assignment_for_teacher(&self, teacher_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.teacher_id == teacher_id)
    }

    /// Subjects assigned to a teacher (empty if not selected).
    pub fn subjects_for_teacher(&self, teacher_id: &str) -> BTreeSet<Subject> {
        self.assignment_for_teacher(teacher_id)
            .map(|a| a.subjects.clone())
            .unwrap_or_default()
    }

    /// Finds the teacher a subject was assigned to.
    pub fn teacher_for_subject(&self, subject: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.subjects.contains(subject))
            .map(|a| a.teacher_id.as_str())
    }

    /// Union of all assigned subjects.
    pub fn covered_subjects(&self) -> BTreeSet<Subject> {
        self.assignments
            .iter()
            .flat_map(|a| a.subjects.iter().cloned())
            .collect()
    }

    /// Mapping view: teacher ID → assigned subjects.
    ///
    /// Assignments of distinct candidates sharing an ID are merged under
    /// that ID; use `assignments` to tell them apart.
    pub fn as_map(&self) -> BTreeMap<String, BTreeSet<Subject>> {
        let mut map: BTreeMap<String, BTreeSet<Subject>> = BTreeMap::new();
        for a in &self.assignments {
            map.entry(a.teacher_id.clone())
                .or_default()
                .extend(a.subjects.iter().cloned());
        }
        map
    }

    /// Whether every subject is assigned at most once.
    pub fn is_disjoint(&self) -> bool {
        let total: usize = self.assignments.iter().map(Assignment::load).sum();
        total == self.covered_subjects().len()
    }
}
