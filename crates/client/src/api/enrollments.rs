//! Enrollments client.

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::{
    Enrollment, EnrollmentFilters, MessageResponse, NewEnrollment, Page, ProgressUpdate,
};

const BASE_PATH: &str = "/enrollments";

/// Client for the `/enrollments` endpoint family.
#[derive(Clone)]
pub struct EnrollmentsClient {
    http: ApiClient,
}

impl EnrollmentsClient {
    pub(crate) fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// List the authenticated user's enrollments.
    pub async fn mine(&self, filters: &EnrollmentFilters) -> ApiResult<Page<Enrollment>> {
        self.http
            .get(&format!("{}/me", BASE_PATH), &filters.to_query())
            .await
    }

    /// List all enrollments (admin only).
    pub async fn list(&self, filters: &EnrollmentFilters) -> ApiResult<Page<Enrollment>> {
        self.http.get(BASE_PATH, &filters.to_query()).await
    }

    /// Fetch a single enrollment by ID.
    pub async fn get_by_id(&self, enrollment_id: &str) -> ApiResult<Enrollment> {
        self.http
            .get(&format!("{}/{}", BASE_PATH, enrollment_id), &[])
            .await
    }

    /// Report video progress for an enrollment.
    pub async fn update_progress(
        &self,
        enrollment_id: &str,
        progress: &ProgressUpdate,
    ) -> ApiResult<MessageResponse> {
        self.http
            .patch(
                &format!("{}/{}/progress", BASE_PATH, enrollment_id),
                progress,
            )
            .await
    }

    /// Create an enrollment (admin only).
    pub async fn create(&self, data: &NewEnrollment) -> ApiResult<Enrollment> {
        self.http.post(BASE_PATH, data).await
    }

    /// Extend an enrollment's expiration (admin only).
    pub async fn extend(&self, enrollment_id: &str, additional_days: u32) -> ApiResult<Enrollment> {
        self.http
            .patch(
                &format!("{}/{}/extend", BASE_PATH, enrollment_id),
                &serde_json::json!({ "additional_days": additional_days }),
            )
            .await
    }

    /// Cancel an enrollment (admin only).
    pub async fn cancel(&self, enrollment_id: &str) -> ApiResult<MessageResponse> {
        self.http
            .delete(&format!("{}/{}", BASE_PATH, enrollment_id))
            .await
    }
}
