use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Take an action on a user (lock the account, send a warning...).
    pub async fn action_user<T: Serialize + ?Sized>(
        &self,
        actionee_user_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user/action")
            .url_segment(actionee_user_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Cancel an action taken on a user.
    pub async fn cancel_action<T: Serialize + ?Sized>(
        &self,
        action_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user/action")
            .url_segment(action_id)
            .json_body(request)
            .delete()
            .go()
            .await
    }

    /// Modify an action taken on a user, usually its expiry.
    pub async fn modify_action<T: Serialize + ?Sized>(
        &self,
        action_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user/action")
            .url_segment(action_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    pub async fn retrieve_action(&self, action_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user/action")
            .url_segment(action_id)
            .get()
            .go()
            .await
    }

    /// Retrieve every action taken on a user.
    pub async fn retrieve_actions(&self, user_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user/action")
            .url_parameter("userId", user_id)
            .get()
            .go()
            .await
    }
}
