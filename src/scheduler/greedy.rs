//! Greedy subject-coverage scheduler.
//!
//! # Algorithm
//!
//! 1. Start with every required subject uncovered and every candidate
//!    available.
//! 2. Each round, intersect each available teacher's teachable set with
//!    the uncovered subjects and keep the running best: a teacher
//!    replaces it when it covers strictly more, or the same number with
//!    a strictly lower age.
//! 3. Assign the winner its coverage, drop those subjects, and retire
//!    the teacher. If nobody covers anything, the instance is infeasible.
//!
//! The tie-break compares only against the running best in candidate
//! order, so on equal coverage and equal age the earlier candidate wins.
//! Reordering candidates can change the result.
//!
//! # Complexity
//! O(r * n * s) where r=rounds, n=candidates, s=uncovered subjects.
//!
//! # Reference
//! Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Assignment, CoverageRequest, Schedule, Subject, Teacher};

/// Outcome when the remaining candidates cannot cover the curriculum.
///
/// This is an expected result of the input data, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no remaining teacher can cover {count} required subject(s)", count = .uncovered.len())]
pub struct Infeasible {
    /// Subjects still uncovered when selection stalled.
    pub uncovered: BTreeSet<Subject>,
    /// Assignments made before the stalled round.
    pub partial: Schedule,
}

/// Greedy set-cover scheduler for teacher staffing.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use u_staffing::models::{Subject, Teacher};
/// use u_staffing::scheduler::GreedyCoverScheduler;
///
/// let required: BTreeSet<Subject> =
///     ["Math", "Physics", "Chemistry"].into_iter().map(Subject::from).collect();
/// let teachers = vec![
///     Teacher::new("A").with_age(40).with_subjects(["Math", "Physics"]),
///     Teacher::new("B").with_age(30).with_subject("Chemistry"),
/// ];
///
/// let schedule = GreedyCoverScheduler::new()
///     .schedule(&required, &teachers)
///     .unwrap();
/// assert_eq!(schedule.teacher_ids(), vec!["A", "B"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyCoverScheduler;

impl GreedyCoverScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Covers `required` with teachers drawn from `candidates`.
    ///
    /// Returns the selected teachers in selection order, or
    /// [`Infeasible`] when some round finds no teacher covering any
    /// uncovered subject. An empty `required` set yields an empty schedule.
    pub fn schedule(
        &self,
        required: &BTreeSet<Subject>,
        candidates: &[Teacher],
    ) -> Result<Schedule, Infeasible> {
        let mut uncovered = required.clone();
        let mut remaining: Vec<usize> = (0..candidates.len()).collect();
        let mut schedule = Schedule::new();
        let mut round = 0usize;

        while !uncovered.is_empty() {
            round += 1;

            let Some((pos, covers)) = select_best(candidates, &remaining, &uncovered) else {
                warn!(
                    round,
                    uncovered = uncovered.len(),
                    remaining = remaining.len(),
                    "no remaining teacher covers the curriculum"
                );
                return Err(Infeasible {
                    uncovered,
                    partial: schedule,
                });
            };

            let idx = remaining.remove(pos);
            let teacher = &candidates[idx];
            for subject in &covers {
                uncovered.remove(subject);
            }

            debug!(
                round,
                teacher = %teacher.id,
                covered = covers.len(),
                uncovered = uncovered.len(),
                "selected teacher"
            );
            schedule.add_assignment(Assignment::new(&teacher.id, idx, covers));
        }

        Ok(schedule)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &CoverageRequest) -> Result<Schedule, Infeasible> {
        self.schedule(&request.subjects, &request.teachers)
    }
}

/// Covers `required` with the default greedy scheduler.
pub fn create_schedule(
    required: &BTreeSet<Subject>,
    candidates: &[Teacher],
) -> Result<Schedule, Infeasible> {
    GreedyCoverScheduler::new().schedule(required, candidates)
}

/// Returns (position in `remaining`, coverage) of the round winner.
fn select_best(
    candidates: &[Teacher],
    remaining: &[usize],
    uncovered: &BTreeSet<Subject>,
) -> Option<(usize, BTreeSet<Subject>)> {
    let mut best: Option<(usize, BTreeSet<Subject>)> = None;

    for (pos, &idx) in remaining.iter().enumerate() {
        let teacher = &candidates[idx];
        let covers = teacher.coverage(uncovered);
        if covers.is_empty() {
            continue;
        }

        let replaces = match &best {
            None => true,
            Some((best_pos, best_cover)) => {
                let best_age = candidates[remaining[*best_pos]].age;
                covers.len() > best_cover.len()
                    || (covers.len() == best_cover.len() && teacher.age < best_age)
            }
        };

        if replaces {
            best = Some((pos, covers));
        }
    }

    best
}
