//! Courses client.

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::{Course, CourseDetail, CourseFilters, Lesson, Page};

const BASE_PATH: &str = "/courses";

/// Client for the `/courses` endpoint family.
#[derive(Clone)]
pub struct CoursesClient {
    http: ApiClient,
}

impl CoursesClient {
    pub(crate) fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// List courses with pagination and filters.
    pub async fn list(&self, filters: &CourseFilters) -> ApiResult<Page<Course>> {
        self.http.get(BASE_PATH, &filters.to_query()).await
    }

    /// Fetch a single course, with embedded lessons, by slug.
    pub async fn get_by_slug(&self, slug: &str) -> ApiResult<CourseDetail> {
        self.http
            .get(&format!("{}/{}", BASE_PATH, slug), &[])
            .await
    }

    /// List the lessons of a course, in course order.
    pub async fn lessons(&self, course_id: &str) -> ApiResult<Vec<Lesson>> {
        self.http
            .get(&format!("{}/{}/lessons", BASE_PATH, course_id), &[])
            .await
    }
}
