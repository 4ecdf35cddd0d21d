//! Aula Client SDK
//!
//! Typed client-side data layer for the Aula course platform, covering:
//!
//! - **Resource Clients**: per-family wrappers over the REST API
//!   (courses, lessons, enrollments, users, auth)
//! - **Session Store**: fail-soft persistence of the login bundle behind
//!   an injectable storage backend
//! - **Reactive State**: observable cells driving UI re-render on change
//! - **Form Schemas**: declarative field validation for the login and
//!   procurement forms
//!
//! ## Modules
//!
//! - [`api`]: resource clients and the [`api::AulaClient`] entry point
//! - [`config`]: configuration loading from environment variables
//! - [`error`]: error types surfaced by API calls
//! - [`models`]: wire models, filters, and the pagination envelope
//! - [`session`]: session persistence
//! - [`state`]: reactive state containers
//! - [`validate`]: form validation schemas
//!
//! ## Example
//!
//! ```ignore
//! use aula_client::{api::AulaClient, models::CourseFilters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AulaClient::from_env()?;
//!     let page = client.courses().list(&CourseFilters::default()).await?;
//!     println!("{} courses", page.total);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod session;
pub mod state;
pub mod validate;

pub use api::AulaClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use session::Session;
