use passport_rest::ClientResponse;
use serde::Serialize;

use crate::PassportClient;

impl PassportClient {
    /// Write an entry to the audit log.
    pub async fn create_audit_log<T: Serialize + ?Sized>(&self, request: &T) -> ClientResponse {
        self.start()
            .uri("/api/system/audit-log")
            .json_body(request)
            .post()
            .go()
            .await
    }

    pub async fn retrieve_audit_log(&self, audit_log_id: &str) -> ClientResponse {
        self.start()
            .uri("/api/system/audit-log")
            .url_segment(audit_log_id)
            .get()
            .go()
            .await
    }

    /// Search the audit log.
    pub async fn search_audit_logs<T: Serialize + ?Sized>(&self, request: &T) -> ClientResponse {
        self.start()
            .uri("/api/system/audit-log/search")
            .json_body(request)
            .post()
            .go()
            .await
    }
}
