//! Transcript submission value object

use serde::Serialize;

use crate::domain::error::InvalidYearError;

/// One transcript submission, serialized as the processing request body.
///
/// Fields are carried verbatim from the form controls, with two exceptions:
/// the ticker is upper-cased and the year is parsed to an integer before
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSubmission {
    pub company_name: String,
    pub ticker: String,
    pub quarter: String,
    pub year: i32,
    pub call_date: String,
    pub raw_text: String,
}

impl TranscriptSubmission {
    /// Build a submission from raw form field values.
    ///
    /// The year field must hold a whole number; anything else is rejected
    /// rather than silently coerced.
    pub fn from_form(
        company_name: &str,
        ticker: &str,
        quarter: &str,
        year: &str,
        call_date: &str,
        raw_text: &str,
    ) -> Result<Self, InvalidYearError> {
        let year = year.trim().parse::<i32>().map_err(|_| InvalidYearError {
            input: year.to_string(),
        })?;

        Ok(Self {
            company_name: company_name.to_string(),
            ticker: ticker.to_uppercase(),
            quarter: quarter.to_string(),
            year,
            call_date: call_date.to_string(),
            raw_text: raw_text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(ticker: &str, year: &str) -> Result<TranscriptSubmission, InvalidYearError> {
        TranscriptSubmission::from_form("Acme Corp", ticker, "Q2", year, "2025-07-30", "Hello.")
    }

    #[test]
    fn ticker_is_upper_cased() {
        let submission = build("aapl", "2025").unwrap();
        assert_eq!(submission.ticker, "AAPL");
    }

    #[test]
    fn ticker_is_not_trimmed() {
        // The submit path upper-cases only; trimming belongs to the lookup form.
        let submission = build(" aapl ", "2025").unwrap();
        assert_eq!(submission.ticker, " AAPL ");
    }

    #[test]
    fn year_parses_to_integer() {
        let submission = build("AAPL", "2025").unwrap();
        assert_eq!(submission.year, 2025);
    }

    #[test]
    fn year_accepts_surrounding_whitespace() {
        let submission = build("AAPL", " 2025 ").unwrap();
        assert_eq!(submission.year, 2025);
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let err = build("AAPL", "banana").unwrap_err();
        assert_eq!(err.input, "banana");
    }

    #[test]
    fn trailing_garbage_year_is_rejected() {
        // parseInt-style partial parses are not accepted here.
        assert!(build("AAPL", "2025abc").is_err());
    }

    #[test]
    fn other_fields_are_verbatim() {
        let submission = TranscriptSubmission::from_form(
            "  Acme  ",
            "AAPL",
            "Q4",
            "2024",
            "2024-01-31",
            "  body  ",
        )
        .unwrap();
        assert_eq!(submission.company_name, "  Acme  ");
        assert_eq!(submission.quarter, "Q4");
        assert_eq!(submission.call_date, "2024-01-31");
        assert_eq!(submission.raw_text, "  body  ");
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let submission = build("aapl", "2025").unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["company_name"], "Acme Corp");
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["quarter"], "Q2");
        assert_eq!(json["year"], 2025);
        assert_eq!(json["call_date"], "2025-07-30");
        assert_eq!(json["raw_text"], "Hello.");
    }
}
