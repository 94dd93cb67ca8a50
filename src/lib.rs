// Passport SDK - a Rust client for the Passport identity service
//
// Every REST endpoint of the service is exposed as one async method on
// `PassportClient`, and every call returns the same success/error/exception
// envelope.

// Re-export the endpoint facade
pub use passport_client::*;

// Re-export the request builder crate for custom calls
pub use passport_rest;

// Prelude for common imports
pub mod prelude {
    pub use passport_client::models::{ErrorDetail, Errors, LoginRequest, LoginResponse, User};
    pub use passport_client::{
        ClientError, ClientResponse, Outcome, PassportClient, PassportConfig, PassportError,
        ResponseState,
    };
    pub use passport_rest::{ExecutorConfig, Method, RestRequest, Transport};
}
