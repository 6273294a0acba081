//! Transcript domain module

mod result;
mod sentiment;
mod submission;
mod ticker;

pub use result::{RecentTranscript, TranscriptId, TranscriptResult};
pub use sentiment::{render_sentiment, SentimentBand};
pub use submission::TranscriptSubmission;
pub use ticker::normalize_ticker;
