use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Authenticate a user.
    ///
    /// A 200 carries the user and their access token, 202 means the user is
    /// not registered for the application, and 242 asks for a two-factor
    /// code. Failed credentials come back as an application error with the
    /// status Passport chose (404, 409, 410, 423...).
    pub async fn login<T: Serialize + ?Sized>(&self, request: &T) -> ClientResponse {
        self.start()
            .uri("/api/login")
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Record a login that happened outside Passport, for example through a
    /// long-lived session in the calling application.
    pub async fn login_ping(
        &self,
        user_id: &str,
        application_id: &str,
        caller_ip_address: Option<&str>,
    ) -> ClientResponse {
        self.start()
            .uri("/api/login")
            .url_segment(user_id)
            .url_segment(application_id)
            .url_parameter("ipAddress", caller_ip_address)
            .put()
            .go()
            .await
    }

    /// Log a user out. With `global` every refresh token for the user is
    /// revoked, otherwise only `refresh_token`.
    pub async fn logout(&self, global: bool, refresh_token: Option<&str>) -> ClientResponse {
        self.start()
            .uri("/api/logout")
            .url_parameter("global", global)
            .url_parameter("refreshToken", refresh_token)
            .post()
            .go()
            .await
    }

    /// Complete a login with a two-factor code.
    pub async fn verify_two_factor<T: Serialize + ?Sized>(&self, request: &T) -> ClientResponse {
        self.start()
            .uri("/api/two-factor")
            .json_body(request)
            .post()
            .go()
            .await
    }
}
