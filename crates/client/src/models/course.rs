//! Course models and listing filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::lesson::Lesson;

/// Course difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseDifficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl CourseDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseDifficulty::Beginner => "BEGINNER",
            CourseDifficulty::Intermediate => "INTERMEDIATE",
            CourseDifficulty::Advanced => "ADVANCED",
            CourseDifficulty::Expert => "EXPERT",
        }
    }
}

impl fmt::Display for CourseDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Draft,
    Review,
    Published,
    Archived,
    Retired,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Draft => "DRAFT",
            CourseStatus::Review => "REVIEW",
            CourseStatus::Published => "PUBLISHED",
            CourseStatus::Archived => "ARCHIVED",
            CourseStatus::Retired => "RETIRED",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Server-assigned identifier
    pub id: String,

    pub title: String,

    /// URL-safe identifier used by the detail endpoint
    pub slug: String,

    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub difficulty: CourseDifficulty,
    pub cover_image_url: Option<String>,

    pub price: f64,
    pub currency: String,
    pub whatsapp_group_url: Option<String>,

    pub status: CourseStatus,
    pub published_at: Option<DateTime<Utc>>,

    pub rating_average: Option<f64>,
    pub enrollment_count: u64,
    pub lessons_count: u64,
    pub total_duration_hours: f64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub revision_id: Option<String>,

    /// Soft-delete flag
    #[serde(default)]
    pub is_deleted: bool,

    pub deleted_at: Option<DateTime<Utc>>,
}

/// Course detail with embedded lessons, as returned by the slug endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetail {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub difficulty: CourseDifficulty,
    pub cover_image_url: Option<String>,

    pub price: f64,
    pub currency: String,
    pub whatsapp_group_url: Option<String>,

    pub status: CourseStatus,
    pub published_at: Option<DateTime<Utc>>,

    pub rating_average: Option<f64>,
    pub enrollment_count: u64,

    /// Whether the requesting user holds an active enrollment
    #[serde(default)]
    pub is_enrolled: bool,

    pub lessons_count: u64,
    pub total_duration_hours: f64,

    /// Lessons in course order
    #[serde(default)]
    pub lessons: Vec<Lesson>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// Filters for the course listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseFilters {
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub limit: Option<u32>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub difficulty: Option<CourseDifficulty>,

    #[serde(default)]
    pub status: Option<CourseStatus>,

    /// Free-text search
    #[serde(default)]
    pub search: Option<String>,
}

impl CourseFilters {
    /// Query pairs for the present fields.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(ref category) = self.category {
            query.push(("category", category.clone()));
        }
        if let Some(difficulty) = self.difficulty {
            query.push(("difficulty", difficulty.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        if let Some(ref search) = self.search {
            query.push(("search", search.clone()));
        }
        query
    }
}
