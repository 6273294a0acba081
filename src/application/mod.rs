//! Application layer - Use cases and port interfaces
//!
//! Contains the core interaction handlers and trait definitions
//! for external system interactions.

pub mod lookup;
pub mod ports;
pub mod submit;

// Re-export use cases
pub use lookup::{company_path, LookupDecision, TickerLookupUseCase, TICKER_PROMPT};
pub use submit::{SubmitError, SubmitOutput, SubmitTranscriptUseCase, BUSY_LABEL};
