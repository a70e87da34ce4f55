//! Data models for `gradepoint`

pub mod assignment;
pub mod course;
pub mod grade_scale;
pub mod schedule;
pub mod semester;

pub use assignment::{GradeAssignment, SemesterGpaAssignment};
pub use course::Course;
pub use grade_scale::{Grade, GradeScale};
pub use schedule::CreditSchedule;
pub use semester::Semester;
