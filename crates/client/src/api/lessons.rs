//! Lessons client.

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::Lesson;

const BASE_PATH: &str = "/lessons";

/// Client for the `/lessons` endpoint family.
#[derive(Clone)]
pub struct LessonsClient {
    http: ApiClient,
}

impl LessonsClient {
    pub(crate) fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// Fetch a single lesson by ID.
    pub async fn get_by_id(&self, lesson_id: &str) -> ApiResult<Lesson> {
        self.http
            .get(&format!("{}/{}", BASE_PATH, lesson_id), &[])
            .await
    }
}
