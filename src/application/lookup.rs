//! Ticker lookup use case

use crate::domain::transcript::normalize_ticker;

use super::ports::{elements, PageSurface};

/// Prompt shown when the lookup is submitted with an empty ticker
pub const TICKER_PROMPT: &str = "Please enter a ticker symbol";

/// Outcome of gating a company lookup submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupDecision {
    /// The input was rewritten to its normalized form and the submission
    /// may proceed
    Proceed { ticker: String },
    /// The submission was cancelled; the input was left untouched
    Cancelled,
}

/// Path of the company view a proceeding lookup navigates to
pub fn company_path(ticker: &str) -> String {
    format!("/company?ticker={}", ticker)
}

/// Gate and normalize a company lookup submission.
///
/// Makes no network call; it only rewrites the ticker input or cancels
/// the submission with a prompt.
pub struct TickerLookupUseCase<P: PageSurface> {
    page: P,
}

impl<P: PageSurface> TickerLookupUseCase<P> {
    /// Create a new use case instance
    pub fn new(page: P) -> Self {
        Self { page }
    }

    /// Execute the lookup gate
    pub fn execute(&self) -> LookupDecision {
        let raw = self.page.field(elements::TICKER);

        match normalize_ticker(&raw) {
            None => {
                self.page.alert(TICKER_PROMPT);
                LookupDecision::Cancelled
            }
            Some(ticker) => {
                self.page.set_field(elements::TICKER, &ticker);
                LookupDecision::Proceed { ticker }
            }
        }
    }
}
