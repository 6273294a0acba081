//! Analysis service gateway adapters

mod http_api;

pub use http_api::HttpApiGateway;
