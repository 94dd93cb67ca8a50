use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Create a webhook. Passport generates the id when `webhook_id` is
    /// `None`.
    pub async fn create_webhook<T: Serialize + ?Sized>(
        &self,
        webhook_id: Option<&str>,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/webhook")
            .url_segment(webhook_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn retrieve_webhook(&self, webhook_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/webhook")
            .url_segment(webhook_id)
            .get()
            .go()
            .await
    }

    pub async fn retrieve_webhooks(&self) -> ClientResponse {
        self.start().uri("/api/webhook").get().go().await
    }

    pub async fn update_webhook<T: Serialize + ?Sized>(
        &self,
        webhook_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/webhook")
            .url_segment(webhook_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/webhook")
            .url_segment(webhook_id)
            .delete()
            .go()
            .await
    }
}
