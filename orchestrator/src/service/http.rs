use async_trait::async_trait;

use crate::error::StepError;

use super::{TrainRequest, TrainResponse, TrainService};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client for the remote optimizer: `POST {base}/train` with a JSON body.
///
/// No timeout is set on the call itself; a hung service stalls the run
/// until it answers or the socket breaks.
pub struct HttpTrainService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTrainService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpTrainService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl TrainService for HttpTrainService {
    async fn train(&self, request: TrainRequest) -> Result<TrainResponse, StepError> {
        let url = format!("{}/train", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| StepError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StepError::Http {
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| StepError::Decode(e.to_string()))
    }
}
