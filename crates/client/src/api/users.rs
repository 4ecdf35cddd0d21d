//! Users client.

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::{Page, User, UserFilters};

const BASE_PATH: &str = "/users";

/// Client for the `/users` endpoint family.
#[derive(Clone)]
pub struct UsersClient {
    http: ApiClient,
}

impl UsersClient {
    pub(crate) fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// List users with pagination and filters (admin only).
    pub async fn list(&self, filters: &UserFilters) -> ApiResult<Page<User>> {
        self.http.get(BASE_PATH, &filters.to_query()).await
    }
}
