//! Human-readable roster rendering.
//!
//! Formats a schedule as one block per selected teacher:
//!
//! ```text
//! - Natalie Shaw, 29 years, n.shaw@example.com
//!     Teaches: Biology, Chemistry
//! ```

use std::fmt;

use crate::models::{Schedule, Teacher};
use crate::scheduler::{CoverageKpi, Infeasible};

/// Display adapter pairing a schedule with its candidates.
pub struct Roster<'a> {
    schedule: &'a Schedule,
    candidates: &'a [Teacher],
    kpi: Option<&'a CoverageKpi>,
}

impl<'a> Roster<'a> {
    /// Roster without a KPI summary.
    pub fn new(schedule: &'a Schedule, candidates: &'a [Teacher]) -> Self {
        Self {
            schedule,
            candidates,
            kpi: None,
        }
    }

    /// Appends a KPI summary after the teacher blocks.
    pub fn with_kpi(mut self, kpi: &'a CoverageKpi) -> Self {
        self.kpi = Some(kpi);
        self
    }

}

impl fmt::Display for Roster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.schedule.is_empty() {
            return writeln!(f, "Nothing to schedule.");
        }

        writeln!(f, "Teaching schedule:")?;
        for a in &self.schedule.assignments {
            writeln!(f)?;
            match a.resolve(self.candidates) {
                Some((_, t)) => {
                    let name = t.full_name();
                    let name = if name.is_empty() { t.id.as_str() } else { name.as_str() };
                    write!(f, "- {name}, {} years", t.age)?;
                    if !t.email.is_empty() {
                        write!(f, ", {}", t.email)?;
                    }
                    writeln!(f)?;
                }
                None => writeln!(f, "- {}", a.teacher_id)?,
            }

            let subjects: Vec<&str> = a.subjects.iter().map(|s| s.as_str()).collect();
            writeln!(f, "    Teaches: {}", subjects.join(", "))?;
        }

        if let Some(kpi) = self.kpi {
            writeln!(f)?;
            writeln!(
                f,
                "Teachers used: {} of {} | Subjects covered: {}/{} | Max load: {} | Unused capability: {}",
                kpi.teachers_used,
                kpi.candidate_count,
                kpi.subjects_covered,
                kpi.subjects_required,
                kpi.max_load,
                kpi.unused_capability,
            )?;
        }

        Ok(())
    }
}

/// Message shown when the curriculum cannot be covered.
pub fn infeasible_message(infeasible: &Infeasible) -> String {
    let subjects: Vec<&str> = infeasible.uncovered.iter().map(|s| s.as_str()).collect();
    format!(
        "Unable to cover all subjects with the available teachers. Uncovered: {}",
        subjects.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::demo_request;
    use crate::models::Subject;
    use crate::scheduler::create_schedule;
    use std::collections::BTreeSet;

    #[test]
    fn test_roster_lists_teachers_in_selection_order() {
        let req = demo_request();
        let schedule = create_schedule(&req.subjects, &req.teachers).unwrap();
        let text = Roster::new(&schedule, &req.teachers).to_string();

        let shaw = text.find("- Natalie Shaw, 29 years, n.shaw@example.com").unwrap();
        let berg = text.find("- Dmitri Berg, 35 years").unwrap();
        let ivanov = text.find("- Alex Ivanov, 45 years").unwrap();
        assert!(shaw < berg && berg < ivanov);
        assert!(text.contains("    Teaches: Biology, Chemistry\n"));
        assert!(text.contains("    Teaches: Informatics, Physics\n"));
        assert!(!text.contains("Teachers used"));
    }

    #[test]
    fn test_roster_with_kpi() {
        let req = demo_request();
        let schedule = create_schedule(&req.subjects, &req.teachers).unwrap();
        let kpi = CoverageKpi::calculate(&schedule, &req.subjects, &req.teachers);
        let text = Roster::new(&schedule, &req.teachers).with_kpi(&kpi).to_string();
        assert!(text.contains("Teachers used: 3 of 6"));
        assert!(text.contains("Subjects covered: 5/5"));
    }

    #[test]
    fn test_roster_falls_back_to_id() {
        let teachers = vec![Teacher::new("anon").with_age(30).with_subject("Art")];
        let required: BTreeSet<Subject> = ["Art"].into_iter().map(Into::into).collect();
        let schedule = create_schedule(&required, &teachers).unwrap();

        let text = Roster::new(&schedule, &teachers).to_string();
        assert!(text.contains("- anon, 30 years\n"));
    }

    #[test]
    fn test_empty_roster() {
        let text = Roster::new(&Schedule::new(), &[]).to_string();
        assert_eq!(text, "Nothing to schedule.\n");
    }

    #[test]
    fn test_infeasible_message() {
        let required: BTreeSet<Subject> = ["Biology", "Art"].into_iter().map(Into::into).collect();
        let err = create_schedule(&required, &[]).unwrap_err();
        assert_eq!(
            infeasible_message(&err),
            "Unable to cover all subjects with the available teachers. Uncovered: Art, Biology"
        );
    }
}
