//! Processing result value objects

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Opaque transcript identifier.
///
/// The service may emit the id as a JSON string or as an integer; both are
/// accepted and held as text. The id is only ever embedded in the detail
/// path, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranscriptId(String);

impl TranscriptId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranscriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TranscriptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for TranscriptId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(i64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Self(n.to_string()),
            Repr::Text(s) => Self(s),
        })
    }
}

/// Response body of a transcript submission.
///
/// Lives only long enough to be rendered; nothing is cached client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResult {
    pub id: TranscriptId,
    pub summary: String,
    pub sentiment_score: f64,
}

impl TranscriptResult {
    /// Path of the read-only detail view for this transcript
    pub fn detail_path(&self) -> String {
        format!("/transcript/{}", self.id)
    }
}

/// One entry of the recent-transcripts listing
#[derive(Debug, Clone, Deserialize)]
pub struct RecentTranscript {
    pub id: TranscriptId,
    pub company_name: String,
    pub ticker: String,
    pub quarter: String,
    pub year: i32,
    pub call_date: String,
    pub summary: String,
    pub sentiment_score: f64,
}
