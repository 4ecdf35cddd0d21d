//! Authentication client.

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::{AuthBundle, LoginCredentials};

/// Client for the `/auth` endpoints, paired with the session store.
#[derive(Clone)]
pub struct AuthClient {
    http: ApiClient,
}

impl AuthClient {
    pub(crate) fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// Authenticate against `POST /auth/login`.
    ///
    /// On success the returned bundle is persisted wholesale. On any
    /// failure the local session is cleared before the original error is
    /// handed back, so a failed login never leaves stale credentials
    /// behind.
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthBundle> {
        match self
            .http
            .post_public::<_, AuthBundle>("/auth/login", credentials)
            .await
        {
            Ok(bundle) => {
                self.http.session().set(&bundle);
                Ok(bundle)
            }
            Err(e) => {
                self.http.session().clear();
                Err(e)
            }
        }
    }

    /// Drop the local session. Always succeeds from the caller's
    /// perspective; clearing failures are logged inside the store.
    pub fn logout(&self) {
        self.http.session().clear();
    }
}
