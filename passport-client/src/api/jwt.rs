use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Issue an access token for another application, proving identity with
    /// a valid access token. The user must be registered for
    /// `application_id`.
    ///
    /// Authenticates with `Authorization: JWT <token>` instead of the API key.
    pub async fn issue_access_token(
        &self,
        application_id: Option<&str>,
        encoded_jwt: &str,
    ) -> ClientResponse {
        self.start()
            .uri("/api/jwt/issue")
            .jwt_authorization(encoded_jwt)
            .url_parameter("applicationId", application_id)
            .get()
            .go()
            .await
    }

    /// Validate an access token and decode its claims.
    ///
    /// Authenticates with `Authorization: JWT <token>` instead of the API key.
    pub async fn validate_access_token(&self, encoded_jwt: &str) -> ClientResponse {
        self.start()
            .uri("/api/jwt/validate")
            .jwt_authorization(encoded_jwt)
            .get()
            .go()
            .await
    }

    /// Exchange a refresh token for a new access token.
    pub async fn exchange_refresh_token_for_access_token<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/jwt/refresh")
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Retrieve the refresh tokens issued to a user.
    pub async fn retrieve_refresh_tokens(&self, user_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/jwt/refresh")
            .url_parameter("userId", user_id)
            .get()
            .go()
            .await
    }

    /// Retrieve the public key used to verify tokens signed with `key_id`.
    pub async fn retrieve_jwt_public_key(&self, key_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/jwt/public-key")
            .url_segment(key_id)
            .get()
            .go()
            .await
    }

    /// Retrieve every public key, keyed by key id.
    pub async fn retrieve_jwt_public_keys(&self) -> ClientResponse {
        self.start().uri("/api/jwt/public-key").get().go().await
    }
}
