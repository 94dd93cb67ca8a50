//! Log a user into Passport from the command line.
//!
//! ```sh
//! export PASSPORT_API_KEY=...
//! export PASSPORT_BASE_URL=http://localhost:9011
//! RUST_LOG=passport_rest=debug cargo run -p passport-client --example login -- \
//!     <application-id> <login-id> <password>
//! ```

use passport_client::models::{Errors, LoginRequest, LoginResponse};
use passport_client::{PassportClient, ResponseState};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [application_id, login_id, password] = args.as_slice() else {
        eprintln!("usage: login <application-id> <login-id> <password>");
        return ExitCode::from(2);
    };

    let client = match PassportClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::from(2);
        }
    };

    let request = LoginRequest::new(login_id, password).application_id(application_id);
    let response = client.login(&request).await;

    match response.state() {
        ResponseState::Success => {
            let name = response
                .success_as::<LoginResponse>()
                .and_then(Result::ok)
                .and_then(|login| login.user.display_name().map(str::to_owned));
            match response.status() {
                Some(202) => println!("Logged in, but not registered for this application"),
                Some(242) => println!("Two-factor code required"),
                _ => println!("Welcome {}", name.as_deref().unwrap_or("back")),
            }
            ExitCode::SUCCESS
        }
        ResponseState::ApplicationError => {
            match response.error_as::<Errors>().and_then(Result::ok) {
                Some(errors) if !errors.is_empty() => {
                    for code in errors.codes() {
                        eprintln!("Login failed: {code}");
                    }
                }
                _ => eprintln!("Login failed with status {:?}", response.status()),
            }
            ExitCode::FAILURE
        }
        ResponseState::TransportException | ResponseState::DecodingException => {
            if let Some(e) = response.exception() {
                eprintln!("Passport unavailable: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
