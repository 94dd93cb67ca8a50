use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Create an application. Passport generates the id when
    /// `application_id` is `None`.
    pub async fn create_application<T: Serialize + ?Sized>(
        &self,
        application_id: Option<&str>,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn retrieve_application(&self, application_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .get()
            .go()
            .await
    }

    /// Retrieve every active application.
    pub async fn retrieve_applications(&self) -> ClientResponse {
        self.start().uri("/api/application").get().go().await
    }

    /// Retrieve every deactivated application.
    pub async fn retrieve_inactive_applications(&self) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_parameter("inactive", true)
            .get()
            .go()
            .await
    }

    pub async fn update_application<T: Serialize + ?Sized>(
        &self,
        application_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    /// Deactivate (soft delete) an application.
    pub async fn deactivate_application(&self, application_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .delete()
            .go()
            .await
    }

    pub async fn reactivate_application(&self, application_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .url_parameter("reactivate", true)
            .put()
            .go()
            .await
    }

    /// Permanently delete an application along with its roles and
    /// registrations.
    pub async fn delete_application(&self, application_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .url_parameter("hardDelete", true)
            .delete()
            .go()
            .await
    }

    /// Create a role on an application. Passport generates the role id
    /// when `role_id` is `None`.
    pub async fn create_application_role<T: Serialize + ?Sized>(
        &self,
        application_id: &str,
        role_id: Option<&str>,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .url_segment("role")
            .url_segment(role_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn update_application_role<T: Serialize + ?Sized>(
        &self,
        application_id: &str,
        role_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .url_segment("role")
            .url_segment(role_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    /// Delete a role, removing it from every user registration.
    pub async fn delete_application_role(&self, application_id: &str, role_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/application")
            .url_segment(application_id)
            .url_segment("role")
            .url_segment(role_id)
            .delete()
            .go()
            .await
    }
}
