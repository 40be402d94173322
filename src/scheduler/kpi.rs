//! Staffing quality metrics (KPIs).
//!
//! Computes indicators from a completed schedule, its required
//! curriculum, and the candidate list.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Teachers Used | Number of selected teachers |
//! | Coverage Rate | Covered required subjects / required subjects |
//! | Max Load | Most subjects assigned to one teacher |
//! | Avg Load | Mean subjects per selected teacher |
//! | Unused Capability | Teachable-but-unassigned subjects of selected teachers |

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Schedule, Subject, Teacher};

/// Staffing performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageKpi {
    /// Number of selected teachers.
    pub teachers_used: usize,
    /// Number of candidates offered.
    pub candidate_count: usize,
    /// Number of required subjects.
    pub subjects_required: usize,
    /// Number of required subjects that are assigned.
    pub subjects_covered: usize,
    /// Fraction of required subjects covered (0.0..1.0).
    pub coverage_rate: f64,
    /// Largest number of subjects assigned to one teacher.
    pub max_load: usize,
    /// Mean subjects per selected teacher.
    pub avg_load: f64,
    /// Per-teacher assigned subject count, summed over candidates sharing an ID.
    pub load_by_teacher: BTreeMap<String, usize>,
    /// Subjects selected teachers could teach but were not assigned.
    pub unused_capability: usize,
}

impl CoverageKpi {
    /// Computes KPIs for a schedule.
    ///
    /// # Arguments
    /// * `schedule` - The produced schedule.
    /// * `required` - The required curriculum.
    /// * `candidates` - The candidates the schedule was drawn from.
    pub fn calculate(
        schedule: &Schedule,
        required: &BTreeSet<Subject>,
        candidates: &[Teacher],
    ) -> Self {
        let covered = schedule.covered_subjects();
        let subjects_covered = required.intersection(&covered).count();

        let mut load_by_teacher: BTreeMap<String, usize> = BTreeMap::new();
        for a in &schedule.assignments {
            *load_by_teacher.entry(a.teacher_id.clone()).or_insert(0) += a.load();
        }

        let max_load = schedule
            .assignments
            .iter()
            .map(|a| a.load())
            .max()
            .unwrap_or(0);

        let total_load: usize = schedule.assignments.iter().map(|a| a.load()).sum();
        let avg_load = if schedule.is_empty() {
            0.0
        } else {
            total_load as f64 / schedule.teacher_count() as f64
        };

        let unused_capability = schedule
            .assignments
            .iter()
            .filter_map(|a| {
                a.resolve(candidates)
                    .map(|(_, t)| t.teachable.difference(&a.subjects).count())
            })
            .sum();

        let coverage_rate = if required.is_empty() {
            1.0
        } else {
            subjects_covered as f64 / required.len() as f64
        };

        Self {
            teachers_used: schedule.teacher_count(),
            candidate_count: candidates.len(),
            subjects_required: required.len(),
            subjects_covered,
            coverage_rate,
            max_load,
            avg_load,
            load_by_teacher,
            unused_capability,
        }
    }

    /// Whether the schedule stays within a teacher budget and covers
    /// at least `min_coverage` of the curriculum.
    pub fn meets_thresholds(&self, max_teachers: usize, min_coverage: f64) -> bool {
        self.teachers_used <= max_teachers && self.coverage_rate >= min_coverage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn subjects(names: &[&str]) -> BTreeSet<Subject> {
        names.iter().copied().map(Subject::from).collect()
    }

    fn sample() -> (Schedule, BTreeSet<Subject>, Vec<Teacher>) {
        let teachers = vec![
            Teacher::new("A").with_subjects(["Math", "Physics", "Art"]),
            Teacher::new("B").with_subjects(["Chemistry"]),
            Teacher::new("C").with_subjects(["Math"]),
        ];
        let mut schedule = Schedule::new();
        schedule.add_assignment(Assignment::new("A", 0, subjects(&["Math", "Physics"])));
        schedule.add_assignment(Assignment::new("B", 1, subjects(&["Chemistry"])));
        (schedule, subjects(&["Math", "Physics", "Chemistry"]), teachers)
    }

    #[test]
    fn test_kpi_basic() {
        let (schedule, required, teachers) = sample();
        let kpi = CoverageKpi::calculate(&schedule, &required, &teachers);

        assert_eq!(kpi.teachers_used, 2);
        assert_eq!(kpi.candidate_count, 3);
        assert_eq!(kpi.subjects_required, 3);
        assert_eq!(kpi.subjects_covered, 3);
        assert!((kpi.coverage_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.max_load, 2);
        assert!((kpi.avg_load - 1.5).abs() < 1e-10);
        assert_eq!(kpi.load_by_teacher["A"], 2);
        // A could also teach Art
        assert_eq!(kpi.unused_capability, 1);
    }

    #[test]
    fn test_kpi_partial_coverage() {
        let (schedule, _, teachers) = sample();
        let required = subjects(&["Math", "Physics", "Chemistry", "Biology"]);
        let kpi = CoverageKpi::calculate(&schedule, &required, &teachers);

        assert_eq!(kpi.subjects_covered, 3);
        assert!((kpi.coverage_rate - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_stale_candidate_index_falls_back_to_id() {
        let (mut schedule, required, teachers) = sample();
        schedule.assignments[0].candidate_index = 2;
        let kpi = CoverageKpi::calculate(&schedule, &required, &teachers);
        assert_eq!(kpi.unused_capability, 1);
    }

    #[test]
    fn test_kpi_shared_ids_sum_load() {
        let teachers = vec![
            Teacher::new("A").with_age(40).with_subjects(["Math", "Physics"]),
            Teacher::new("A").with_age(30).with_subject("Art"),
        ];
        let required = subjects(&["Math", "Art"]);
        let schedule = crate::scheduler::create_schedule(&required, &teachers).unwrap();
        let kpi = CoverageKpi::calculate(&schedule, &required, &teachers);

        assert_eq!(kpi.teachers_used, 2);
        assert_eq!(kpi.load_by_teacher["A"], 2);
        // Only the first A could also teach Physics
        assert_eq!(kpi.unused_capability, 1);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = CoverageKpi::calculate(&Schedule::new(), &BTreeSet::new(), &[]);
        assert_eq!(kpi.teachers_used, 0);
        assert_eq!(kpi.max_load, 0);
        assert!((kpi.avg_load - 0.0).abs() < 1e-10);
        assert!((kpi.coverage_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let (schedule, required, teachers) = sample();
        let kpi = CoverageKpi::calculate(&schedule, &required, &teachers);

        assert!(kpi.meets_thresholds(2, 1.0));
        assert!(!kpi.meets_thresholds(1, 1.0));
        assert!(!kpi.meets_thresholds(5, 1.5));
    }
}
