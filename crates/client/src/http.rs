//! HTTP implementation of [`AssessmentApi`].

use crate::api::{AssessmentApi, PatientPage};
use crate::config::ClientConfig;
use crate::fetch;
use crate::{ClientError, ClientResult};
use serde::de::DeserializeOwned;
use triage_core::{AlertLists, PatientRecord};

const API_KEY_HEADER: &str = "x-api-key";
const PATIENTS_PATH: &str = "patients";
const SUBMIT_PATH: &str = "submit-assessment";

/// Assessment API client over `reqwest`.
pub struct AssessmentClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl AssessmentClient {
    /// Builds a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn patients_url(&self, page: u32) -> String {
        format!(
            "{}?page={}&limit={}",
            self.config.base_url().join(PATIENTS_PATH),
            page,
            self.config.page_limit()
        )
    }

    pub fn submit_url(&self) -> String {
        self.config.base_url().join(SUBMIT_PATH)
    }

    /// Fetches every patient using the configured retry policy.
    pub async fn fetch_all_patients(&self) -> ClientResult<Vec<PatientRecord>> {
        fetch::fetch_all_patients(self, &self.config.retry_policy()).await
    }

    /// Submits the alert lists once.
    pub async fn submit_alert_lists(&self, lists: &AlertLists) -> ClientResult<serde_json::Value> {
        fetch::submit_alert_lists(self, lists).await
    }
}

impl AssessmentApi for AssessmentClient {
    async fn fetch_page(&self, page: u32) -> ClientResult<PatientPage> {
        let response = self
            .http
            .get(self.patients_url(page))
            .header(API_KEY_HEADER, self.config.api_key().expose())
            .send()
            .await?;
        read_json(response).await
    }

    async fn submit(&self, lists: &AlertLists) -> ClientResult<serde_json::Value> {
        let response = self
            .http
            .post(self.submit_url())
            .header(API_KEY_HEADER, self.config.api_key().expose())
            .json(lists)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Checks the status and decodes a JSON body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_types::{ApiKey, BaseUrl};

    fn client(base_url: &str) -> AssessmentClient {
        let config = ClientConfig::new(
            ApiKey::new("ak_test").expect("valid key"),
            BaseUrl::new(base_url).expect("valid url"),
        )
        .with_page_limit(20)
        .expect("valid limit");
        AssessmentClient::new(config).expect("client builds")
    }

    #[test]
    fn builds_patients_url() {
        let client = client("https://assessment.example/api/");
        assert_eq!(
            client.patients_url(3),
            "https://assessment.example/api/patients?page=3&limit=20"
        );
    }

    #[test]
    fn builds_submit_url() {
        let client = client("http://localhost:8080/api");
        assert_eq!(
            client.submit_url(),
            "http://localhost:8080/api/submit-assessment"
        );
    }

    #[test]
    fn keeps_config() {
        let client = client("http://localhost:8080");
        assert_eq!(client.config().page_limit(), 20);
        assert_eq!(client.config().api_key().expose(), "ak_test");
    }
}
