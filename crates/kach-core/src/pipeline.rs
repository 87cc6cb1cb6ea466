//! Batch ingestion: classify, extract, normalize, relay, forward.

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::ForwardError;
use crate::extract;
use crate::forward::Dispatcher;
use crate::models::config::EndpointConfig;
use crate::models::message::{RawMessage, TransactionRecord};
use crate::normalize::normalize;
use crate::provider::{Provider, classify};

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Records accepted by the pipeline, in message order.
    pub records: Vec<TransactionRecord>,

    /// Handles of the forward attempts spawned for this batch. They complete
    /// in any order; dropping them leaves the attempts running.
    pub forwards: Vec<JoinHandle<Result<(), ForwardError>>>,

    /// Messages dropped because the sender matched no known provider.
    pub unknown_senders: usize,

    /// Messages dropped because no pattern matched for their provider.
    pub pattern_misses: usize,
}

impl BatchOutcome {
    /// Total messages dropped, for whatever reason.
    pub fn dropped(&self) -> usize {
        self.unknown_senders + self.pattern_misses
    }
}

/// Runs the full pipeline over batches of raw messages.
pub struct Pipeline {
    dispatcher: Dispatcher,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(),
        }
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Process one batch of raw messages.
    ///
    /// The classify → extract → normalize stage is synchronous and does no
    /// I/O; accepted records reach `sink` in message order and are handed to
    /// the dispatcher without waiting on the network. Drops are counted and
    /// logged, never propagated, and a failure on one message does not stop
    /// the rest of the batch. Must run inside a tokio runtime when the
    /// endpoint is enabled.
    pub fn process_batch<F>(
        &self,
        messages: &[RawMessage],
        endpoint: &EndpointConfig,
        mut sink: F,
    ) -> BatchOutcome
    where
        F: FnMut(&TransactionRecord),
    {
        let mut outcome = BatchOutcome::default();

        for message in messages {
            let provider = classify(&message.sender);
            if provider == Provider::Unknown {
                debug!(sender = %message.sender, "unknown sender, dropping message");
                outcome.unknown_senders += 1;
                continue;
            }

            let Some(fields) = extract::extract(provider, &message.body) else {
                warn!(
                    provider = %provider,
                    sender = %message.sender,
                    "no receipt pattern matched, dropping message"
                );
                outcome.pattern_misses += 1;
                continue;
            };

            let record = normalize(provider, fields, &message.sender);
            debug!(
                provider = %provider,
                transaction_id = %record.transaction_id,
                "accepted transaction"
            );

            sink(&record);
            if let Some(handle) = self.dispatcher.dispatch(&record, endpoint) {
                outcome.forwards.push(handle);
            }
            outcome.records.push(record);
        }

        info!(
            accepted = outcome.records.len(),
            dropped = outcome.dropped(),
            "batch processed"
        );

        outcome
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
