//! Curriculum staffing for the U-Engine ecosystem.
//!
//! Assigns teachers to the subjects of a required curriculum using a
//! greedy set-cover heuristic, and reports when the curriculum cannot
//! be covered.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Teacher`, `CoverageRequest`,
//!   `Schedule`, `Assignment`, `Violation`
//! - **`scheduler`**: `GreedyCoverScheduler`, `Infeasible`, `CoverageKpi`
//! - **`validation`**: Input checks (duplicate IDs, uncoverable subjects)
//!   and schedule checks (completeness, disjointness, validity)
//! - **`roster`**: Text rendering of a schedule
//! - **`generator`**: Random and demo problem instances
//! - **`config`**: TOML configuration and problem-file loading
//!
//! # Example
//!
//! ```
//! use u_staffing::generator::demo_request;
//! use u_staffing::scheduler::GreedyCoverScheduler;
//! use u_staffing::validation::validate_schedule;
//!
//! let request = demo_request();
//! let schedule = GreedyCoverScheduler::new().schedule_request(&request).unwrap();
//! assert!(validate_schedule(&schedule, &request.subjects, &request.teachers).is_empty());
//! ```
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Vazirani (2001), "Approximation Algorithms", Ch. 2

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
