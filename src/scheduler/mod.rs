//! Greedy coverage scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyCoverScheduler` repeatedly picks the teacher covering the most
//! still-uncovered subjects (younger wins ties against the running best).
//! It is a heuristic: it may use more teachers than an optimal cover, and
//! it reports [`Infeasible`] only when no remaining teacher covers anything.
//!
//! # KPI
//!
//! `CoverageKpi` summarizes a schedule: teachers used, coverage rate,
//! per-teacher load, and unused capability.
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.3

mod greedy;
mod kpi;

pub use greedy::{create_schedule, GreedyCoverScheduler, Infeasible};
pub use kpi::CoverageKpi;
