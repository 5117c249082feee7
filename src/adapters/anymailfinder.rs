use crate::domain::model::RawApiResult;
use crate::domain::ports::DecisionMakerApi;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str =
    "https://api.anymailfinder.com/v5.0/search/decision-maker.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

/// Anymailfinder decision-maker search over HTTP. One POST per lookup, one
/// attempt, bounded by the configured timeout. The key and endpoint are
/// injected at construction; nothing is read from the environment here.
pub struct AnymailfinderClient {
    client: Client,
    endpoint: String,
    api_key: String,
    category: String,
    timeout: Duration,
}

impl AnymailfinderClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        category: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            category: category.into(),
            timeout,
        }
    }
}

#[async_trait]
impl DecisionMakerApi for AnymailfinderClient {
    async fn lookup(&self, domain: &str) -> RawApiResult {
        tracing::debug!("POST {} for domain {}", self.endpoint, domain);

        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&serde_json::json!({
                "domain": domain,
                "category": self.category,
            }));

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return RawApiResult::Timeout,
            Err(e) if e.is_connect() => {
                return RawApiResult::ConnectionError {
                    detail: e.to_string(),
                }
            }
            Err(e) => {
                return RawApiResult::UnknownTransportError {
                    detail: e.to_string(),
                }
            }
        };

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        // The request timeout also covers reading the body.
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if e.is_timeout() => return RawApiResult::Timeout,
            Err(e) => {
                return RawApiResult::UnknownTransportError {
                    detail: e.to_string(),
                }
            }
        };

        if status == 200 {
            match serde_json::from_str(&text) {
                Ok(body) => RawApiResult::Success { body },
                Err(_) => RawApiResult::MalformedResponse { raw: text },
            }
        } else {
            RawApiResult::HttpError { status, body: text }
        }
    }
}
