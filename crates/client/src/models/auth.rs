//! Authentication payloads.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Persisted token + user pairing representing a logged-in session.
///
/// The login endpoint returns exactly this shape, and the session store
/// persists it wholesale under a single storage slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthBundle {
    /// Bearer token attached to authenticated requests
    pub access_token: String,

    /// Token scheme reported by the server (normally "bearer")
    pub token_type: String,

    /// Profile of the signed-in user
    pub user: User,
}
