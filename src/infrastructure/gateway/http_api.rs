//! HTTP analysis service adapter

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{ApiError, TranscriptGateway};
use crate::domain::forecast::ForecastSeries;
use crate::domain::transcript::{RecentTranscript, TranscriptResult, TranscriptSubmission};

/// Processing endpoint path
const PROCESS_TRANSCRIPT_PATH: &str = "/api/process-transcript";

/// Recent transcripts endpoint path
const RECENT_TRANSCRIPTS_PATH: &str = "/api/transcripts/recent";

// Wire envelope for the recent-transcripts listing

#[derive(Debug, Deserialize)]
struct RecentTranscriptsResponse {
    transcripts: Vec<RecentTranscript>,
}

/// HTTP client for the transcript analysis service
pub struct HttpApiGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApiGateway {
    /// Create a new gateway against the given server base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Build a full URL for an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the forecasts URL for a ticker
    fn forecasts_url(&self, ticker: &str) -> String {
        format!("{}/api/forecasts/{}", self.base_url, ticker)
    }

    /// Map a response to a decoded body.
    ///
    /// Non-success statuses become errors without the body being read;
    /// the service's error-body shape is not part of this client's
    /// contract.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TranscriptGateway for HttpApiGateway {
    async fn process_transcript(
        &self,
        submission: &TranscriptSubmission,
    ) -> Result<TranscriptResult, ApiError> {
        let response = self
            .client
            .post(self.url(PROCESS_TRANSCRIPT_PATH))
            .json(submission)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode(response).await
    }

    async fn recent_transcripts(&self) -> Result<Vec<RecentTranscript>, ApiError> {
        let response = self
            .client
            .get(self.url(RECENT_TRANSCRIPTS_PATH))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let listing: RecentTranscriptsResponse = Self::decode(response).await?;
        Ok(listing.transcripts)
    }

    async fn forecasts(&self, ticker: &str, metric: &str) -> Result<ForecastSeries, ApiError> {
        let response = self
            .client
            .get(self.forecasts_url(ticker))
            .query(&[("metric", metric)])
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let gateway = HttpApiGateway::new("http://localhost:5000");
        assert_eq!(
            gateway.url(PROCESS_TRANSCRIPT_PATH),
            "http://localhost:5000/api/process-transcript"
        );
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let gateway = HttpApiGateway::new("http://localhost:5000/");
        assert_eq!(
            gateway.url(RECENT_TRANSCRIPTS_PATH),
            "http://localhost:5000/api/transcripts/recent"
        );
    }

    #[test]
    fn forecasts_url_embeds_ticker() {
        let gateway = HttpApiGateway::new("http://localhost:5000");
        assert_eq!(
            gateway.forecasts_url("AAPL"),
            "http://localhost:5000/api/forecasts/AAPL"
        );
    }
}
