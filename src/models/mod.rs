//! Staffing domain models.
//!
//! Provides the data types for describing a curriculum coverage problem
//! and its solution.
//!
//! # Domain Mappings
//!
//! | u-staffing | School | Clinic | Support desk |
//! |------------|--------|--------|--------------|
//! | Subject | Course | Specialty | Product area |
//! | Teacher | Instructor | Physician | Agent |
//! | Schedule | Teaching roster | Duty roster | On-call roster |

mod request;
mod schedule;
mod subject;
mod teacher;

pub use request::CoverageRequest;
pub use schedule::{Assignment, Schedule, Violation, ViolationType};
pub use subject::Subject;
pub use teacher::Teacher;
