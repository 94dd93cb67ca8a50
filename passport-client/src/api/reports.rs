use passport_rest::ClientResponse;

use crate::PassportClient;

// Report ranges are epoch milliseconds. `application_id` narrows a report to
// one application; `None` covers all of them.
impl PassportClient {
    pub async fn retrieve_daily_active_report(
        &self,
        application_id: Option<&str>,
        start: i64,
        end: i64,
    ) -> ClientResponse {
        self.report("/api/report/daily-active-user", application_id, start, end)
            .await
    }

    pub async fn retrieve_login_report(
        &self,
        application_id: Option<&str>,
        start: i64,
        end: i64,
    ) -> ClientResponse {
        self.report("/api/report/login", application_id, start, end).await
    }

    pub async fn retrieve_monthly_active_report(
        &self,
        application_id: Option<&str>,
        start: i64,
        end: i64,
    ) -> ClientResponse {
        self.report("/api/report/monthly-active-user", application_id, start, end)
            .await
    }

    pub async fn retrieve_registration_report(
        &self,
        application_id: Option<&str>,
        start: i64,
        end: i64,
    ) -> ClientResponse {
        self.report("/api/report/registration", application_id, start, end)
            .await
    }

    /// Retrieve global and per-application login and registration totals.
    pub async fn retrieve_total_report(&self) -> ClientResponse {
        self.start().uri("/api/report/totals").get().go().await
    }

    /// Retrieve a page of a user's login history.
    pub async fn retrieve_user_login_report(
        &self,
        user_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ClientResponse {
        self.start()
            .uri("/api/report/user-login")
            .url_parameter("userId", user_id)
            .url_parameter("offset", offset)
            .url_parameter("limit", limit)
            .get()
            .go()
            .await
    }

    async fn report(
        &self,
        uri: &str,
        application_id: Option<&str>,
        start: i64,
        end: i64,
    ) -> ClientResponse {
        self.start()
            .uri(uri)
            .url_parameter("applicationId", application_id)
            .url_parameter("start", start)
            .url_parameter("end", end)
            .get()
            .go()
            .await
    }
}
