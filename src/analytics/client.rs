//! Analytics HTTP Client
//!
//! A client for the backend analytics endpoint. One call is one poll; there
//! is no retry here.

use crate::analytics::error::FetchError;
use crate::analytics::{AnalyticsSnapshot, AnalyticsSource};
use crate::consts::cli_consts::polling;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("sensor-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: Client,
    environment: Environment,
}

impl AnalyticsClient {
    pub fn new(environment: Environment) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .connect_timeout(polling::connect_timeout())
            .timeout(polling::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            environment,
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_response(response).await);
        }
        Ok(response)
    }

    fn decode_response(bytes: &[u8]) -> Result<AnalyticsSnapshot, FetchError> {
        serde_json::from_slice(bytes).map_err(FetchError::Decode)
    }
}

#[async_trait::async_trait]
impl AnalyticsSource for AnalyticsClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_snapshot(&self) -> Result<AnalyticsSnapshot, FetchError> {
        let response = self
            .client
            .get(self.environment.api_url())
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}
