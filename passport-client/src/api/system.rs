use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    pub async fn retrieve_system_configuration(&self) -> ClientResponse {
        self.start().uri("/api/system-configuration").get().go().await
    }

    /// Replace the system configuration.
    pub async fn update_system_configuration<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/system-configuration")
            .json_body(request)
            .put()
            .go()
            .await
    }
}
