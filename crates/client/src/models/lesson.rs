//! Lesson models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Downloadable or linked material embedded in a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonMaterial {
    pub title: String,
    pub resource_url: String,
    pub file_format: Option<String>,
    pub is_downloadable: bool,
    pub order: u32,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Lesson within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub summary: Option<String>,
    pub duration_seconds: Option<u64>,

    /// Position within the course
    pub order: u32,

    /// Previewable without an enrollment
    pub is_preview: bool,

    pub video_url: Option<String>,
    pub video_id: Option<String>,

    #[serde(default)]
    pub materials: Vec<LessonMaterial>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub revision_id: Option<String>,

    #[serde(default)]
    pub is_deleted: bool,

    pub deleted_at: Option<DateTime<Utc>>,
}
