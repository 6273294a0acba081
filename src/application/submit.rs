//! Transcript submission use case

use thiserror::Error;

use crate::domain::error::InvalidYearError;
use crate::domain::transcript::{render_sentiment, TranscriptId, TranscriptSubmission};

use super::ports::{elements, ApiError, PageSurface, TranscriptGateway};

/// Label shown on the submit control while a request is in flight
pub const BUSY_LABEL: &str = "Processing...";

/// Errors from the submit use case
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error("{0}")]
    InvalidYear(#[from] InvalidYearError),

    #[error("{0}")]
    Api(#[from] ApiError),
}

/// Output from a successful submission, mirroring what was rendered
#[derive(Debug, Clone)]
pub struct SubmitOutput {
    pub id: TranscriptId,
    pub summary: String,
    pub sentiment_text: String,
    pub detail_path: String,
}

/// One-shot transcript submission use case.
///
/// Reads the six form fields from the page, swaps the submit control into
/// its busy state, performs the single outbound request, and renders the
/// result regions. The submit control is restored exactly once per attempt,
/// whether the attempt succeeded or failed.
pub struct SubmitTranscriptUseCase<G, P>
where
    G: TranscriptGateway,
    P: PageSurface,
{
    gateway: G,
    page: P,
}

impl<G, P> SubmitTranscriptUseCase<G, P>
where
    G: TranscriptGateway,
    P: PageSurface,
{
    /// Create a new use case instance
    pub fn new(gateway: G, page: P) -> Self {
        Self { gateway, page }
    }

    /// Execute the submission workflow
    pub async fn execute(&self) -> Result<SubmitOutput, SubmitError> {
        // Read form data
        let company_name = self.page.field(elements::COMPANY_NAME);
        let ticker = self.page.field(elements::TICKER);
        let quarter = self.page.field(elements::QUARTER);
        let year = self.page.field(elements::YEAR);
        let call_date = self.page.field(elements::CALL_DATE);
        let raw_text = self.page.field(elements::TRANSCRIPT_TEXT);

        // Show loading state
        let original_label = self.page.submit_label();
        self.page.set_submit_label(BUSY_LABEL);
        self.page.set_submit_enabled(false);

        let outcome = self
            .attempt(&company_name, &ticker, &quarter, &year, &call_date, &raw_text)
            .await;

        if let Err(e) = &outcome {
            self.page.alert(&format!("Error processing transcript: {}", e));
        }

        // Restore the submit control on success and failure alike
        self.page.set_submit_label(&original_label);
        self.page.set_submit_enabled(true);

        outcome
    }

    /// The fallible part of a submission: build the body, call the service,
    /// render the result. Failure anywhere leaves the result regions and
    /// form untouched.
    async fn attempt(
        &self,
        company_name: &str,
        ticker: &str,
        quarter: &str,
        year: &str,
        call_date: &str,
        raw_text: &str,
    ) -> Result<SubmitOutput, SubmitError> {
        let submission =
            TranscriptSubmission::from_form(company_name, ticker, quarter, year, call_date, raw_text)?;

        let result = self.gateway.process_transcript(&submission).await?;

        let sentiment_text = render_sentiment(result.sentiment_score);
        let detail_path = result.detail_path();

        // Display results
        self.page.set_text(elements::SUMMARY_TEXT, &result.summary);
        self.page.set_text(elements::SENTIMENT_TEXT, &sentiment_text);
        self.page.set_link(elements::VIEW_FULL_LINK, &detail_path);
        self.page.set_visible(elements::PROCESSING_RESULT, true);

        // Reset form
        self.page.reset_form();

        Ok(SubmitOutput {
            id: result.id,
            summary: result.summary,
            sentiment_text,
            detail_path,
        })
    }
}
