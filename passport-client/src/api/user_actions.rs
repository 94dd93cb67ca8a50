use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Define a user action. Passport generates the id when
    /// `user_action_id` is `None`.
    pub async fn create_user_action<T: Serialize + ?Sized>(
        &self,
        user_action_id: Option<&str>,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user-action")
            .url_segment(user_action_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn retrieve_user_action(&self, user_action_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user-action")
            .url_segment(user_action_id)
            .get()
            .go()
            .await
    }

    /// Retrieve every active user action.
    pub async fn retrieve_user_actions(&self) -> ClientResponse {
        self.start().uri("/api/user-action").get().go().await
    }

    /// Retrieve every deactivated user action.
    pub async fn retrieve_inactive_user_actions(&self) -> ClientResponse {
        self.start()
            .uri("/api/user-action")
            .url_parameter("inactive", true)
            .get()
            .go()
            .await
    }

    pub async fn update_user_action<T: Serialize + ?Sized>(
        &self,
        user_action_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user-action")
            .url_segment(user_action_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    /// Deactivate (soft delete) a user action.
    pub async fn deactivate_user_action(&self, user_action_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user-action")
            .url_segment(user_action_id)
            .delete()
            .go()
            .await
    }

    pub async fn reactivate_user_action(&self, user_action_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user-action")
            .url_segment(user_action_id)
            .url_parameter("reactivate", true)
            .put()
            .go()
            .await
    }

    /// Permanently delete a user action.
    pub async fn delete_user_action(&self, user_action_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user-action")
            .url_segment(user_action_id)
            .url_parameter("hardDelete", true)
            .delete()
            .go()
            .await
    }

    /// Create a reason that can be attached to a user action.
    pub async fn create_user_action_reason<T: Serialize + ?Sized>(
        &self,
        user_action_reason_id: Option<&str>,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user-action-reason")
            .url_segment(user_action_reason_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn retrieve_user_action_reason(&self, user_action_reason_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user-action-reason")
            .url_segment(user_action_reason_id)
            .get()
            .go()
            .await
    }

    pub async fn retrieve_user_action_reasons(&self) -> ClientResponse {
        self.start().uri("/api/user-action-reason").get().go().await
    }

    pub async fn update_user_action_reason<T: Serialize + ?Sized>(
        &self,
        user_action_reason_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user-action-reason")
            .url_segment(user_action_reason_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    pub async fn delete_user_action_reason(&self, user_action_reason_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user-action-reason")
            .url_segment(user_action_reason_id)
            .delete()
            .go()
            .await
    }
}
