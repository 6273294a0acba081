//! Main app runners

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use crate::application::ports::{elements, ConfigStore, TranscriptGateway};
use crate::application::{company_path, LookupDecision, SubmitTranscriptUseCase, TickerLookupUseCase};
use crate::domain::config::AppConfig;
use crate::domain::forecast::ForecastPoint;
use crate::domain::transcript::render_sentiment;
use crate::infrastructure::{HttpApiGateway, MemoryPage, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Parsed submit options
#[derive(Debug, Clone)]
pub struct SubmitOptions {
    pub server_url: String,
    pub company_name: String,
    pub ticker: String,
    pub quarter: String,
    pub year: String,
    pub call_date: String,
    pub transcript: String,
}

/// Parsed company lookup options
#[derive(Debug, Clone)]
pub struct CompanyOptions {
    pub server_url: String,
    pub ticker: String,
    pub metric: String,
}

/// Run the transcript submission
pub async fn run_submit(options: SubmitOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Seed the page the way the filled form would look at submit time
    let page = MemoryPage::with_fields(&[
        (elements::COMPANY_NAME, options.company_name.as_str()),
        (elements::TICKER, options.ticker.as_str()),
        (elements::QUARTER, options.quarter.as_str()),
        (elements::YEAR, options.year.as_str()),
        (elements::CALL_DATE, options.call_date.as_str()),
        (elements::TRANSCRIPT_TEXT, options.transcript.as_str()),
    ]);

    let gateway = HttpApiGateway::new(&options.server_url);
    let use_case = SubmitTranscriptUseCase::new(gateway, page.clone());

    presenter.start_spinner("Processing transcript...");
    let outcome = use_case.execute().await;

    match outcome {
        Ok(output) => {
            presenter.spinner_success("Transcript processed");

            presenter.heading("Summary");
            presenter.output(&output.summary);
            presenter.key_value("Sentiment", &output.sentiment_text);
            presenter.key_value(
                "Full transcript",
                &format!("{}{}", options.server_url, output.detail_path),
            );

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(_) => {
            presenter.spinner_fail("Submission failed");

            // The page collected the user-facing alert for this attempt
            for alert in page.alerts() {
                presenter.error(&alert);
            }

            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the recent-transcripts listing
pub async fn run_recent(server_url: String) -> ExitCode {
    let mut presenter = Presenter::new();
    let gateway = HttpApiGateway::new(&server_url);

    presenter.start_spinner("Fetching recent transcripts...");
    match gateway.recent_transcripts().await {
        Ok(transcripts) => {
            presenter.stop_spinner();

            if transcripts.is_empty() {
                presenter.info("No transcripts processed yet");
                return ExitCode::from(EXIT_SUCCESS);
            }

            for t in &transcripts {
                presenter.heading(&format!(
                    "{} ({}) {} {}",
                    t.company_name, t.ticker, t.quarter, t.year
                ));
                presenter.key_value("Date", &t.call_date);
                presenter.key_value("Sentiment", &render_sentiment(t.sentiment_score));
                presenter.key_value("Link", &format!("{}/transcript/{}", server_url, t.id));
                presenter.output(&t.summary);
                presenter.output("");
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Fetch failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the company lookup: gate the ticker, then fetch the forecast series
pub async fn run_company(options: CompanyOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let page = MemoryPage::with_fields(&[(elements::TICKER, options.ticker.as_str())]);
    let lookup = TickerLookupUseCase::new(page.clone());

    let ticker = match lookup.execute() {
        LookupDecision::Proceed { ticker } => ticker,
        LookupDecision::Cancelled => {
            for alert in page.alerts() {
                presenter.error(&alert);
            }
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    presenter.info(&format!("Looking up {}", company_path(&ticker)));

    let gateway = HttpApiGateway::new(&options.server_url);

    presenter.start_spinner("Fetching forecasts...");
    match gateway.forecasts(&ticker, &options.metric).await {
        Ok(series) => {
            presenter.stop_spinner();

            if series.forecasts.is_empty() {
                presenter.info(&format!("No {} forecasts for {}", series.metric, series.ticker));
                return ExitCode::from(EXIT_SUCCESS);
            }

            presenter.heading(&format!("{} forecasts for {}", series.metric, series.ticker));
            for point in &series.forecasts {
                presenter.output(&format_forecast_point(point));
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Fetch failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Format one forecast point as a fixed-width line
fn format_forecast_point(point: &ForecastPoint) -> String {
    match (point.lower_bound, point.upper_bound) {
        (Some(lo), Some(hi)) => format!(
            "{}  {:>12.2}  [{:.2}, {:.2}]",
            point.date, point.value, lo, hi
        ),
        _ => format!("{}  {:>12.2}", point.date, point.value),
    }
}

/// Load the transcript body from a file, or from stdin when no file is given
pub async fn load_transcript(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path).await,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Load and merge configuration from file and CLI.
///
/// Precedence: defaults < config file < CLI/env (the server flag reads
/// CALL_DESK_SERVER_URL through clap).
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lo: Option<f64>, hi: Option<f64>) -> ForecastPoint {
        ForecastPoint {
            date: "2025-09-30".to_string(),
            value: 89.5,
            lower_bound: lo,
            upper_bound: hi,
        }
    }

    #[test]
    fn forecast_point_with_bounds() {
        let line = format_forecast_point(&point(Some(85.0), Some(94.0)));
        assert!(line.starts_with("2025-09-30"));
        assert!(line.contains("89.50"));
        assert!(line.contains("[85.00, 94.00]"));
    }

    #[test]
    fn forecast_point_without_bounds() {
        let line = format_forecast_point(&point(None, None));
        assert!(line.contains("89.50"));
        assert!(!line.contains('['));
    }

    #[tokio::test]
    async fn load_transcript_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("call.txt");
        tokio::fs::write(&path, "Good morning everyone.")
            .await
            .unwrap();

        let text = load_transcript(Some(&path)).await.unwrap();
        assert_eq!(text, "Good morning everyone.");
    }

    #[tokio::test]
    async fn load_transcript_missing_file_errors() {
        let result = load_transcript(Some(Path::new("/nonexistent/call.txt"))).await;
        assert!(result.is_err());
    }
}
