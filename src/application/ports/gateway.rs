//! Analysis service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::forecast::ForecastSeries;
use crate::domain::transcript::{RecentTranscript, TranscriptResult, TranscriptSubmission};

/// Errors from the analysis service exchange.
///
/// All three collapse into one user-facing "submission failed" alert; the
/// variants exist so failures can be told apart in tests and messages.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("could not reach server: {0}")]
    RequestFailed(String),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode server response: {0}")]
    Decode(String),
}

/// Port for the transcript analysis service
#[async_trait]
pub trait TranscriptGateway: Send + Sync {
    /// Submit a transcript for processing.
    ///
    /// One request, no retry. A non-success status is an error; the error
    /// body, if any, is not consumed.
    async fn process_transcript(
        &self,
        submission: &TranscriptSubmission,
    ) -> Result<TranscriptResult, ApiError>;

    /// Fetch the most recently processed transcripts
    async fn recent_transcripts(&self) -> Result<Vec<RecentTranscript>, ApiError>;

    /// Fetch the forecast series for a company and metric
    async fn forecasts(&self, ticker: &str, metric: &str) -> Result<ForecastSeries, ApiError>;
}
