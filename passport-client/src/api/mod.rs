//! Passport API operations, one `impl PassportClient` block per resource.
//!
//! Each method fixes the HTTP method and URI template, forwards its
//! arguments to the request builder and returns the envelope untouched.
//! Optional identifiers are `Option<&str>`: `None` lets Passport generate
//! the id, while `Some("")` is skipped the same way.

mod actions;
mod applications;
mod audit;
mod email;
mod jwt;
mod login;
mod registrations;
mod reports;
mod system;
mod user_actions;
mod users;
mod webhooks;
