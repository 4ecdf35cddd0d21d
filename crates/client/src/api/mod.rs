//! Per-family resource clients.
//!
//! Each client maps 1:1 onto a remote endpoint family under a fixed base
//! path. Validation, authorization, and computation happen server-side;
//! the clients only assemble requests and decode responses.

mod auth;
mod courses;
mod enrollments;
mod lessons;
mod users;

pub use auth::AuthClient;
pub use courses::CoursesClient;
pub use enrollments::EnrollmentsClient;
pub use lessons::LessonsClient;
pub use users::UsersClient;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::session::Session;

/// Entry point bundling the resource clients over one shared HTTP layer.
#[derive(Clone)]
pub struct AulaClient {
    http: ApiClient,
}

impl AulaClient {
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> Self {
        Self {
            http: ApiClient::new(config, session),
        }
    }

    /// Client configured from `AULA_`-prefixed environment variables,
    /// with the session persisted under the home directory.
    pub fn from_env() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self::new(&config, Arc::new(Session::from_home())))
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.http.clone())
    }

    pub fn courses(&self) -> CoursesClient {
        CoursesClient::new(self.http.clone())
    }

    pub fn lessons(&self) -> LessonsClient {
        LessonsClient::new(self.http.clone())
    }

    pub fn enrollments(&self) -> EnrollmentsClient {
        EnrollmentsClient::new(self.http.clone())
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.http.clone())
    }

    pub fn session(&self) -> &Arc<Session> {
        self.http.session()
    }
}
