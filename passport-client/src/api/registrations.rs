use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Register a user for an application.
    ///
    /// With `user_id` set the user must already exist. With `None` the
    /// request body must carry the user as well and both are created.
    pub async fn register<T: Serialize + ?Sized>(
        &self,
        user_id: Option<&str>,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user/registration")
            .url_segment(user_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn retrieve_registration(&self, user_id: &str, application_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user/registration")
            .url_segment(user_id)
            .url_segment(application_id)
            .get()
            .go()
            .await
    }

    pub async fn update_registration<T: Serialize + ?Sized>(
        &self,
        user_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user/registration")
            .url_segment(user_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    pub async fn delete_registration(&self, user_id: &str, application_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user/registration")
            .url_segment(user_id)
            .url_segment(application_id)
            .delete()
            .go()
            .await
    }
}
