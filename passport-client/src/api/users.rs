use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Create a user. Passport generates the id when `user_id` is `None`.
    pub async fn create_user<T: Serialize + ?Sized>(
        &self,
        user_id: Option<&str>,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_segment(user_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Retrieve a user by id.
    pub async fn retrieve_user(&self, user_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_segment(user_id)
            .get()
            .go()
            .await
    }

    /// Retrieve a user by email address.
    pub async fn retrieve_user_by_email(&self, email: &str) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_parameter("email", email)
            .get()
            .go()
            .await
    }

    /// Retrieve a user by login id (email or username).
    pub async fn retrieve_user_by_login_id(&self, login_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_parameter("loginId", login_id)
            .get()
            .go()
            .await
    }

    /// Retrieve a user by username.
    pub async fn retrieve_user_by_username(&self, username: &str) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_parameter("username", username)
            .get()
            .go()
            .await
    }

    /// Update a user.
    pub async fn update_user<T: Serialize + ?Sized>(
        &self,
        user_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_segment(user_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    /// Deactivate (soft delete) a user.
    pub async fn deactivate_user(&self, user_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_segment(user_id)
            .delete()
            .go()
            .await
    }

    /// Reactivate a deactivated user.
    pub async fn reactivate_user(&self, user_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_segment(user_id)
            .url_parameter("reactivate", true)
            .put()
            .go()
            .await
    }

    /// Permanently delete a user and everything associated with them.
    pub async fn delete_user(&self, user_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user")
            .url_segment(user_id)
            .url_parameter("hardDelete", true)
            .delete()
            .go()
            .await
    }

    /// Deactivate several users at once.
    pub async fn deactivate_users(&self, user_ids: &[&str]) -> ClientResponse {
        self.start()
            .uri("/api/user/bulk")
            .url_parameter("userId", user_ids)
            .delete()
            .go()
            .await
    }

    /// Permanently delete several users at once.
    pub async fn delete_users(&self, user_ids: &[&str]) -> ClientResponse {
        self.start()
            .uri("/api/user/bulk")
            .url_parameter("userId", user_ids)
            .url_parameter("hardDelete", true)
            .delete()
            .go()
            .await
    }

    /// Bulk import users.
    pub async fn import_users<T: Serialize + ?Sized>(&self, request: &T) -> ClientResponse {
        self.start()
            .uri("/api/user/import")
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Retrieve the users with the given ids.
    pub async fn search_users(&self, ids: &[&str]) -> ClientResponse {
        self.start()
            .uri("/api/user/search")
            .url_parameter("ids", ids)
            .get()
            .go()
            .await
    }

    /// Search users with a query string and paging criteria.
    pub async fn search_users_by_query_string<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user/search")
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Add a comment to a user's account.
    pub async fn comment_on_user<T: Serialize + ?Sized>(&self, request: &T) -> ClientResponse {
        self.start()
            .uri("/api/user/comment")
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Retrieve every comment on a user's account.
    pub async fn retrieve_user_comments(&self, user_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user/comment")
            .url_segment(user_id)
            .get()
            .go()
            .await
    }

    /// Change a password using the verification id from a forgot-password
    /// email.
    pub async fn change_password<T: Serialize + ?Sized>(
        &self,
        verification_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user/change-password")
            .url_segment(verification_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Change a password using the login id and current password carried in
    /// the request body.
    pub async fn change_password_by_identity<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/user/change-password")
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Start the forgot-password workflow.
    pub async fn forgot_password<T: Serialize + ?Sized>(&self, request: &T) -> ClientResponse {
        self.start()
            .uri("/api/user/forgot-password")
            .json_body(request)
            .post()
            .go()
            .await
    }

    /// Confirm an email address with the id sent in the verification email.
    pub async fn verify_email(&self, verification_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/user/verify-email")
            .url_segment(verification_id)
            .post()
            .go()
            .await
    }

    /// Send the verification email again.
    pub async fn resend_email_verification(&self, email: &str) -> ClientResponse {
        self.start()
            .uri("/api/user/verify-email")
            .url_parameter("email", email)
            .put()
            .go()
            .await
    }
}
