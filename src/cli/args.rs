//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// CallDesk - earnings-call transcript analysis client
#[derive(Parser, Debug)]
#[command(name = "call-desk")]
#[command(version)]
#[command(about = "Submit earnings-call transcripts for analysis and browse the results")]
#[command(long_about = None)]
pub struct Cli {
    /// Base URL of the analysis server
    #[arg(
        short = 's',
        long,
        value_name = "URL",
        env = "CALL_DESK_SERVER_URL",
        global = true
    )]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a transcript for processing
    Submit(SubmitArgs),
    /// List the most recently processed transcripts
    Recent,
    /// Look up a company by ticker and show its forecast series
    Company {
        /// Ticker symbol (normalized to uppercase)
        ticker: String,

        /// Forecast metric to fetch
        #[arg(short, long, value_name = "METRIC")]
        metric: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments of the submit subcommand, mirroring the submission form
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Company name
    #[arg(long = "company", value_name = "NAME")]
    pub company_name: String,

    /// Ticker symbol
    #[arg(long, value_name = "SYMBOL")]
    pub ticker: String,

    /// Fiscal quarter of the call
    #[arg(long, value_enum)]
    pub quarter: QuarterArg,

    /// Year of the call
    #[arg(long, value_name = "YEAR")]
    pub year: String,

    /// Date of the call (e.g., 2025-07-30)
    #[arg(long = "date", value_name = "DATE")]
    pub call_date: String,

    /// Read the transcript body from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Quarter argument for clap ValueEnum.
///
/// The submission form offers a fixed choice of quarters; the field value
/// sent to the service is the upper-case form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum QuarterArg {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl QuarterArg {
    /// The form field value for this quarter
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["server_url", "metric"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_submit() {
        let cli = Cli::parse_from([
            "call-desk", "submit", "--company", "Acme Corp", "--ticker", "acme", "--quarter",
            "q2", "--year", "2025", "--date", "2025-07-30",
        ]);
        let Commands::Submit(args) = cli.command else {
            panic!("Expected submit command");
        };
        assert_eq!(args.company_name, "Acme Corp");
        assert_eq!(args.ticker, "acme");
        assert_eq!(args.quarter, QuarterArg::Q2);
        assert_eq!(args.year, "2025");
        assert_eq!(args.call_date, "2025-07-30");
        assert!(args.file.is_none());
    }

    #[test]
    fn cli_parses_submit_with_file() {
        let cli = Cli::parse_from([
            "call-desk", "submit", "--company", "Acme", "--ticker", "acme", "--quarter", "q4",
            "--year", "2024", "--date", "2024-01-31", "--file", "call.txt",
        ]);
        let Commands::Submit(args) = cli.command else {
            panic!("Expected submit command");
        };
        assert_eq!(args.file, Some(PathBuf::from("call.txt")));
    }

    #[test]
    fn cli_rejects_unknown_quarter() {
        assert!(Cli::try_parse_from([
            "call-desk", "submit", "--company", "Acme", "--ticker", "acme", "--quarter", "q5",
            "--year", "2024", "--date", "2024-01-31",
        ])
        .is_err());
    }

    #[test]
    fn cli_parses_server_flag() {
        let cli = Cli::parse_from(["call-desk", "--server", "http://desk:8000", "recent"]);
        assert_eq!(cli.server, Some("http://desk:8000".to_string()));
        assert!(matches!(cli.command, Commands::Recent));
    }

    #[test]
    fn cli_parses_server_after_subcommand() {
        // The flag is global, so it may follow the subcommand
        let cli = Cli::parse_from(["call-desk", "recent", "--server", "http://desk:8000"]);
        assert_eq!(cli.server, Some("http://desk:8000".to_string()));
    }

    #[test]
    fn cli_parses_company() {
        let cli = Cli::parse_from(["call-desk", "company", "  aapl  ", "--metric", "eps"]);
        let Commands::Company { ticker, metric } = cli.command else {
            panic!("Expected company command");
        };
        assert_eq!(ticker, "  aapl  ");
        assert_eq!(metric, Some("eps".to_string()));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["call-desk", "config", "set", "server_url", "http://x:1"]);
        let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        else {
            panic!("Expected config set command");
        };
        assert_eq!(key, "server_url");
        assert_eq!(value, "http://x:1");
    }

    #[test]
    fn quarter_values_are_upper_case() {
        assert_eq!(QuarterArg::Q1.as_str(), "Q1");
        assert_eq!(QuarterArg::Q4.as_str(), "Q4");
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("server_url"));
        assert!(is_valid_config_key("metric"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
