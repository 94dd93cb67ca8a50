//! Typed views over the JSON payloads Passport exchanges.
//!
//! Every API method accepts any `Serialize` body and returns raw JSON in the
//! envelope; these types are optional lenses for the common cases:
//!
//! ```
//! use passport_client::models::Errors;
//! use passport_client::ClientResponse;
//! # fn inspect(response: ClientResponse) {
//! if let Some(Ok(errors)) = response.error_as::<Errors>() {
//!     for (field, details) in &errors.field_errors {
//!         println!("{field}: {:?}", details.iter().map(|d| &d.code).collect::<Vec<_>>());
//!     }
//! }
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Error payload returned with 4xx responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Errors {
    /// Errors not tied to a request field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub general_errors: Vec<ErrorDetail>,
    /// Errors keyed by request field path, e.g. `user.email`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, Vec<ErrorDetail>>,
}

impl Errors {
    /// Whether no error was reported at all.
    pub fn is_empty(&self) -> bool {
        self.general_errors.is_empty() && self.field_errors.is_empty()
    }

    /// Errors reported for `field`.
    pub fn field(&self, field: &str) -> &[ErrorDetail] {
        self.field_errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every error code, general errors first.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.general_errors
            .iter()
            .chain(self.field_errors.values().flatten())
            .map(|detail| detail.code.as_str())
    }
}

/// One error entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable code such as `[blank]user.email`.
    pub code: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of [`PassportClient::login`](crate::PassportClient::login).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Application the user is logging into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Email address or username.
    pub login_id: String,
    pub password: String,
    /// Caller's IP address, recorded with the login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Authenticate without issuing an access token.
    #[serde(rename = "noJWT", default, skip_serializing_if = "std::ops::Not::not")]
    pub no_jwt: bool,
}

impl LoginRequest {
    pub fn new(login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            application_id: None,
            login_id: login_id.into(),
            password: password.into(),
            ip_address: None,
            no_jwt: false,
        }
    }

    /// Log into a specific application.
    pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Authenticate without issuing a token.
    pub fn no_jwt(mut self, no_jwt: bool) -> Self {
        self.no_jwt = no_jwt;
        self
    }
}

/// Success payload of a login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Encoded access token.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// A Passport user. Fields Passport adds beyond these are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Name to greet the user with: first name, then username, then email.
    pub fn display_name(&self) -> Option<&str> {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
    }
}
