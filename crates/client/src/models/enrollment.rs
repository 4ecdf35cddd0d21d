//! Enrollment models, filters, and mutation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enrollment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Active,
    Expired,
    Cancelled,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "ACTIVE",
            EnrollmentStatus::Expired => "EXPIRED",
            EnrollmentStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's enrollment in a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub status: EnrollmentStatus,

    pub enrolled_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,

    /// Resume point: last lesson the user opened
    pub last_accessed_lesson_id: Option<String>,

    /// Resume point: playback position within that lesson
    pub last_video_position_seconds: Option<u64>,

    pub last_accessed_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub certificate_url: Option<String>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub revision_id: Option<String>,

    #[serde(default)]
    pub is_deleted: bool,

    pub deleted_at: Option<DateTime<Utc>>,
}

/// Filters for the enrollment listing endpoints.
///
/// `user_id` and `course_id` only apply to the admin listing; the
/// `/enrollments/me` endpoint ignores them server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrollmentFilters {
    #[serde(default)]
    pub status: Option<EnrollmentStatus>,

    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub size: Option<u32>,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub course_id: Option<String>,
}

impl EnrollmentFilters {
    /// Query pairs for the present fields.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        if let Some(ref user_id) = self.user_id {
            query.push(("user_id", user_id.clone()));
        }
        if let Some(ref course_id) = self.course_id {
            query.push(("course_id", course_id.clone()));
        }
        query
    }
}

/// Video progress update payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub lesson_id: String,
    pub video_position_seconds: u64,
}

/// Payload for creating an enrollment (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub user_id: String,
    pub course_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        assert!(EnrollmentFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_status_filter_spelling() {
        let filters = EnrollmentFilters {
            status: Some(EnrollmentStatus::Cancelled),
            page: Some(1),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("status", "CANCELLED".to_string()),
                ("page", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_new_enrollment_omits_absent_notes() {
        let payload = NewEnrollment {
            user_id: "usr_1".to_string(),
            course_id: "crs_1".to_string(),
            notes: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("notes").is_none());
    }
}
