//! # Passport Client
//!
//! One async method per Passport identity service operation: users,
//! login and logout, JWT issuance and validation, applications and roles,
//! registrations, user actions, reports, audit logs, email templates,
//! webhooks and system configuration.
//!
//! Every method returns a [`ClientResponse`]. Branch on
//! [`state()`](ClientResponse::state) or on the payload accessors; API calls
//! never return `Err`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use passport_client::{PassportClient, ResponseState};
//! use passport_client::models::{Errors, LoginRequest, LoginResponse};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // PASSPORT_API_KEY and PASSPORT_BASE_URL
//!     let client = PassportClient::from_env()?;
//!
//!     let request = LoginRequest::new("jane@example.com", "password")
//!         .application_id("6c6dfe33-2c9d-4a38-8a33-8e7f5b1e3d39");
//!     let response = client.login(&request).await;
//!
//!     match response.state() {
//!         ResponseState::Success => {
//!             if let Some(Ok(login)) = response.success_as::<LoginResponse>() {
//!                 println!("Welcome {:?}", login.user.display_name());
//!             }
//!         }
//!         ResponseState::ApplicationError => {
//!             let errors = response.error_as::<Errors>().and_then(Result::ok);
//!             println!("Login rejected ({:?}): {:?}", response.status(), errors);
//!         }
//!         _ => println!("Passport unavailable: {:?}", response.exception()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `PASSPORT_API_KEY` | yes | |
//! | `PASSPORT_BASE_URL` | yes | |
//! | `PASSPORT_CONNECT_TIMEOUT_MS` | no | 2000 |
//! | `PASSPORT_READ_TIMEOUT_MS` | no | 2000 |

mod api;
mod client;
mod config;
mod error;
pub mod models;

pub use client::PassportClient;
pub use config::{ENV_PREFIX, PassportConfig};
pub use error::{PassportError, Result};

// Re-export the envelope so callers need only this crate
pub use passport_rest::{ClientError, ClientResponse, Outcome, ResponseState, Transport};

/// Prelude for common imports.
///
/// ```
/// use passport_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::PassportClient;
    pub use crate::config::PassportConfig;
    pub use crate::error::{PassportError, Result};
    pub use crate::models::{Errors, LoginRequest, LoginResponse, User};
    pub use passport_rest::{ClientError, ClientResponse, Outcome, ResponseState};
}
