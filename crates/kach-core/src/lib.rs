//! Core library for the kach mobile-money SMS relay.
//!
//! This crate provides:
//! - Provider classification from SMS sender addresses (MonCash, NatCash)
//! - Provider-specific receipt field extraction
//! - Normalization into a canonical transaction record
//! - Fire-and-forget forwarding of records to a configured HTTP backend

pub mod error;
pub mod extract;
pub mod forward;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod provider;

pub use error::{ForwardError, KachError, Result};
pub use forward::Dispatcher;
pub use models::config::{EndpointConfig, ForwardConfig, KachConfig};
pub use models::message::{ExtractedFields, RawMessage, TransactionRecord};
pub use normalize::normalize;
pub use pipeline::{BatchOutcome, Pipeline};
pub use provider::{Provider, classify};
