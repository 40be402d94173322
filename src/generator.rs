//! Staffing problem generator.
//!
//! Generates random curriculum/candidate instances for experiments and
//! randomized tests, plus a small fixed demo instance.

use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{CoverageRequest, Subject, Teacher};

const FIRST_NAMES: &[&str] = &[
    "Alex", "Maria", "Sergio", "Natalie", "Dmitri", "Helen", "Omar", "Ingrid", "Kenji", "Lucia",
];
const LAST_NAMES: &[&str] = &[
    "Ivanov", "Petrova", "Costa", "Shaw", "Berg", "Grant", "Haddad", "Lund", "Mori", "Reyes",
];

/// Configuration for generating staffing problems.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageGeneratorConfig {
    /// Number of required subjects.
    pub num_subjects: usize,
    /// Number of candidate teachers.
    pub num_teachers: usize,
    /// Teachable subjects per teacher (min, max), inclusive.
    pub subjects_per_teacher: (usize, usize),
    /// Teacher age range (min, max), inclusive.
    pub age_range: (u32, u32),
    /// Patch the instance so every subject has at least one teacher.
    pub ensure_coverable: bool,
}

impl Default for CoverageGeneratorConfig {
    fn default() -> Self {
        Self {
            num_subjects: 8,
            num_teachers: 10,
            subjects_per_teacher: (1, 3),
            age_range: (25, 65),
            ensure_coverable: true,
        }
    }
}

impl CoverageGeneratorConfig {
    /// Small instance: few subjects, generous candidates.
    pub fn small() -> Self {
        Self {
            num_subjects: 5,
            num_teachers: 6,
            subjects_per_teacher: (1, 2),
            ..Self::default()
        }
    }

    /// Large instance: many subjects, narrow teachers.
    pub fn large() -> Self {
        Self {
            num_subjects: 40,
            num_teachers: 60,
            subjects_per_teacher: (1, 5),
            ..Self::default()
        }
    }
}

/// Generates a random instance.
pub fn generate<R: Rng>(config: &CoverageGeneratorConfig, rng: &mut R) -> CoverageRequest {
    let subjects: Vec<Subject> = (1..=config.num_subjects)
        .map(|i| Subject::new(format!("Subject {i:02}")))
        .collect();

    let (lo, hi) = ordered(config.subjects_per_teacher);
    let (age_lo, age_hi) = ordered(config.age_range);

    let mut teachers: Vec<Teacher> = (1..=config.num_teachers)
        .map(|i| {
            let id = format!("T{i:03}");
            let first = FIRST_NAMES.choose(rng).copied().unwrap_or_default();
            let last = LAST_NAMES.choose(rng).copied().unwrap_or_default();
            let count = rng.random_range(lo..=hi).min(subjects.len());
            let teachable = subjects.choose_multiple(rng, count).cloned();

            Teacher::new(&id)
                .with_name(first, last)
                .with_age(rng.random_range(age_lo..=age_hi))
                .with_email(format!("{}@example.com", id.to_ascii_lowercase()))
                .with_subjects(teachable)
        })
        .collect();

    if config.ensure_coverable && !teachers.is_empty() {
        for subject in &subjects {
            if !teachers.iter().any(|t| t.teachable.contains(subject)) {
                let idx = rng.random_range(0..teachers.len());
                teachers[idx].teachable.insert(subject.clone());
            }
        }
    }

    CoverageRequest::new(subjects.into_iter().collect(), teachers)
}

/// Generates a reproducible instance from a seed.
pub fn generate_seeded(config: &CoverageGeneratorConfig, seed: u64) -> CoverageRequest {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(config, &mut rng)
}

/// Fixed five-subject, six-teacher instance.
pub fn demo_request() -> CoverageRequest {
    let subjects: BTreeSet<Subject> = ["Mathematics", "Physics", "Chemistry", "Informatics", "Biology"]
        .into_iter()
        .map(Subject::from)
        .collect();

    let teachers = vec![
        Teacher::new("ivanov")
            .with_name("Alex", "Ivanov")
            .with_age(45)
            .with_email("a.ivanov@example.com")
            .with_subjects(["Mathematics", "Physics"]),
        Teacher::new("petrova")
            .with_name("Maria", "Petrova")
            .with_age(38)
            .with_email("m.petrova@example.com")
            .with_subjects(["Chemistry"]),
        Teacher::new("costa")
            .with_name("Sergio", "Costa")
            .with_age(50)
            .with_email("s.costa@example.com")
            .with_subjects(["Informatics", "Mathematics"]),
        Teacher::new("shaw")
            .with_name("Natalie", "Shaw")
            .with_age(29)
            .with_email("n.shaw@example.com")
            .with_subjects(["Biology", "Chemistry"]),
        Teacher::new("berg")
            .with_name("Dmitri", "Berg")
            .with_age(35)
            .with_email("d.berg@example.com")
            .with_subjects(["Physics", "Informatics"]),
        Teacher::new("grant")
            .with_name("Helen", "Grant")
            .with_age(42)
            .with_email("h.grant@example.com")
            .with_subjects(["Biology"]),
    ];

    CoverageRequest::new(subjects, teachers)
}

fn ordered<T: PartialOrd>((a, b): (T, T)) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
