use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Create an email template. Passport generates the id when
    /// `email_template_id` is `None`.
    pub async fn create_email_template<T: Serialize + ?Sized>(
        &self,
        email_template_id: Option<&str>,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/email/template")
            .url_segment(email_template_id)
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn retrieve_email_template(&self, email_template_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/email/template")
            .url_segment(email_template_id)
            .get()
            .go()
            .await
    }

    pub async fn retrieve_email_templates(&self) -> ClientResponse {
        self.start().uri("/api/email/template").get().go().await
    }

    /// Render a template without saving it, returning the rendered email
    /// and any template errors.
    pub async fn retrieve_email_template_preview<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/email/template/preview")
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn update_email_template<T: Serialize + ?Sized>(
        &self,
        email_template_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/email/template")
            .url_segment(email_template_id)
            .json_body(request)
            .put()
            .go()
            .await
    }

    pub async fn delete_email_template(&self, email_template_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/email/template")
            .url_segment(email_template_id)
            .delete()
            .go()
            .await
    }

    /// Send an email rendered from a template to the users and addresses in
    /// the request.
    pub async fn send_email<T: Serialize + ?Sized>(
        &self,
        email_template_id: &str,
        request: &T,
    ) -> ClientResponse {
        self.start()
            .uri("/api/email/send")
            .url_segment(email_template_id)
            .json_body(request)
            .post()
            .go()
            .await
    }
}
