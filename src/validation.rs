//! Input and solution validation for staffing problems.
//!
//! [`validate_input`] checks structural integrity of the candidate list
//! before scheduling. Detects:
//! - Duplicate or empty teacher IDs
//! - Teachers with nothing to teach (reported, never blocking)
//! - Required subjects that no candidate can teach
//!
//! [`validate_input_strict`] keeps only the blocking findings.
//!
//! [`validate_schedule`] checks a produced schedule against the
//! curriculum: every required subject assigned exactly once, and only
//! to a teacher able to teach it.

use crate::models::{Schedule, Subject, Teacher, Violation, ViolationType};
use std::collections::{BTreeSet, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two teachers share the same ID.
    DuplicateId,
    /// A teacher has an empty ID.
    EmptyId,
    /// A teacher has no teachable subjects.
    NoTeachableSubjects,
    /// A required subject is not teachable by any candidate.
    UncoverableSubject,
}

impl ValidationErrorKind {
    /// Whether this finding makes the input unusable.
    ///
    /// An empty teachable set is legal input: the scheduler simply never
    /// selects that teacher.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, Self::NoTeachableSubjects)
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the input data for a staffing problem.
///
/// Checks:
/// 1. No empty teacher IDs
/// 2. No duplicate teacher IDs
/// 3. Every teacher can teach at least one subject (non-blocking)
/// 4. Every required subject is teachable by some candidate
///
/// A failure of check 4 guarantees the scheduler reports infeasibility.
/// See [`ValidationErrorKind::is_blocking`] for which findings matter to
/// [`validate_input_strict`].
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(required: &BTreeSet<Subject>, teachers: &[Teacher]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_ids = HashSet::new();
    for (idx, t) in teachers.iter().enumerate() {
        if t.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Teacher at position {idx} has an empty ID"),
            ));
        } else if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }

        if t.teachable.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoTeachableSubjects,
                format!("Teacher '{}' has no teachable subjects", t.id),
            ));
        }
    }

    let teachable: HashSet<&Subject> = teachers.iter().flat_map(|t| &t.teachable).collect();
    for subject in required {
        if !teachable.contains(subject) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UncoverableSubject,
                format!("No teacher can teach required subject '{subject}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Like [`validate_input`], but fails only on blocking findings.
pub fn validate_input_strict(
    required: &BTreeSet<Subject>,
    teachers: &[Teacher],
) -> ValidationResult {
    match validate_input(required, teachers) {
        Err(errors) => {
            let blocking: Vec<_> = errors.into_iter().filter(|e| e.kind.is_blocking()).collect();
            if blocking.is_empty() {
                Ok(())
            } else {
                Err(blocking)
            }
        }
        ok => ok,
    }
}

/// Checks a schedule against the curriculum and candidates.
///
/// Returns every violation found; an empty vector means the schedule
/// is complete, disjoint, and valid. Assignments are matched to candidates
/// by `candidate_index` first, so candidates sharing an ID stay distinct.
pub fn validate_schedule(
    schedule: &Schedule,
    required: &BTreeSet<Subject>,
    teachers: &[Teacher],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut assigned: HashSet<&Subject> = HashSet::new();
    let mut selected: HashSet<usize> = HashSet::new();
    let mut unresolved: HashSet<&str> = HashSet::new();

    for a in &schedule.assignments {
        let teacher = a.resolve(teachers);
        let repeated = match teacher {
            Some((idx, _)) => !selected.insert(idx),
            None => !unresolved.insert(a.teacher_id.as_str()),
        };
        if repeated {
            violations.push(Violation::new(
                ViolationType::RepeatedTeacher,
                &a.teacher_id,
                format!("Teacher '{}' is selected more than once", a.teacher_id),
            ));
        }

        if teacher.is_none() {
            violations.push(Violation::new(
                ViolationType::UnknownTeacher,
                &a.teacher_id,
                format!("Teacher '{}' is not among the candidates", a.teacher_id),
            ));
        }

        for subject in &a.subjects {
            if !assigned.insert(subject) {
                violations.push(Violation::duplicate_subject(subject, &a.teacher_id));
            }
            if let Some((_, t)) = teacher {
                if !t.teachable.contains(subject) {
                    violations.push(Violation::not_teachable(&a.teacher_id, subject));
                }
            }
        }
    }

    for subject in required {
        if !assigned.contains(subject) {
            violations.push(Violation::missing_subject(subject));
        }
    }

    violations
}
