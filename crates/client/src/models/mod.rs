//! Typed wire models for the Aula API.
//!
//! Entities are read-only projections of server state: the client never
//! mutates them in place, only replaces them wholesale on refetch. Filter
//! structs enumerate the allowed query keys per resource family.

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod page;
pub mod user;

pub use auth::{AuthBundle, LoginCredentials};
pub use course::{Course, CourseDetail, CourseDifficulty, CourseFilters, CourseStatus};
pub use enrollment::{
    Enrollment, EnrollmentFilters, EnrollmentStatus, NewEnrollment, ProgressUpdate,
};
pub use lesson::{Lesson, LessonMaterial};
pub use page::{MessageResponse, Page};
pub use user::{User, UserFilters, UserRole};
