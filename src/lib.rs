//! CallDesk - terminal client for an earnings-call transcript analysis service
//!
//! This crate submits earnings-call transcripts to an analysis backend and
//! renders the returned summary and sentiment classification. It can also
//! list recently processed transcripts and look up company forecast series.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects (submissions, results, sentiment bands) and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP gateway, page surface, config store)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
