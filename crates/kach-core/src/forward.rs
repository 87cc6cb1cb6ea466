//! Fire-and-forget forwarding of transaction records to the backend.

use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::ForwardError;
use crate::models::config::EndpointConfig;
use crate::models::message::TransactionRecord;

/// Default timeout bounding a single forward attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resource path records are POSTed to, relative to the base URL.
const TRANSACTIONS_PATH: &str = "transactions";

const USER_AGENT: &str = concat!("kach/", env!("CARGO_PKG_VERSION"));

struct BoundClient {
    base_url: String,
    client: Client,
}

/// Forwards records to the configured backend, at most once each.
///
/// The HTTP client is reused while the base URL stays the same and rebuilt
/// when it changes. A dispatch in flight keeps the client handle it started
/// with, so a rebuild never affects requests already underway.
pub struct Dispatcher {
    timeout: Duration,
    bound: Mutex<Option<BoundClient>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// A dispatcher whose forward attempts are bounded by `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            bound: Mutex::new(None),
        }
    }

    /// Forward `record` to `endpoint` on a background task.
    ///
    /// Returns `None` without touching the network when the endpoint is
    /// disabled, or when no HTTP client could be built. Otherwise returns
    /// the handle of the spawned attempt, which callers may await or drop.
    /// Failures are logged and never retried; nothing flows back into the
    /// record. Must be called inside a tokio runtime.
    pub fn dispatch(
        &self,
        record: &TransactionRecord,
        endpoint: &EndpointConfig,
    ) -> Option<JoinHandle<Result<(), ForwardError>>> {
        if endpoint.is_disabled() {
            debug!("no backend configured, skipping forward");
            return None;
        }

        let client = match self.client_for(&endpoint.base_url) {
            Ok(client) => client,
            Err(err) => {
                warn!(error = %err, "could not build HTTP client, dropping forward");
                return None;
            }
        };

        let url = format!(
            "{}/{}",
            endpoint.base_url.trim_end_matches('/'),
            TRANSACTIONS_PATH
        );
        let record = record.clone();

        Some(tokio::spawn(async move {
            let result = send(&client, &url, &record).await;
            if let Err(err) = &result {
                warn!(
                    transaction_id = %record.transaction_id,
                    error = %err,
                    "failed to forward transaction"
                );
            }
            result
        }))
    }

    /// Reuse the client bound to `base_url`, rebuilding if the URL changed.
    fn client_for(&self, base_url: &str) -> Result<Client, ForwardError> {
        let mut bound = match self.bound.lock() {
            Ok(guard) => guard,
            // Poisoning only loses the cached client; rebind below.
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(existing) = bound.as_ref() {
            if existing.base_url == base_url {
                return Ok(existing.client.clone());
            }
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        *bound = Some(BoundClient {
            base_url: base_url.to_string(),
            client: client.clone(),
        });

        Ok(client)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

async fn send(client: &Client, url: &str, record: &TransactionRecord) -> Result<(), ForwardError> {
    let response = client.post(url).json(record).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ForwardError::Status(status));
    }

    debug!(transaction_id = %record.transaction_id, "forwarded transaction");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_record() -> TransactionRecord {
        TransactionRecord {
            amount: "2000".to_string(),
            sender_number: "50987654321".to_string(),
            transaction_id: "112233".to_string(),
            service_provider: "Natcash (Natcash)".to_string(),
        }
    }

    #[test]
    fn disabled_endpoint_spawns_nothing() {
        // No runtime here on purpose: a disabled endpoint must not even
        // reach tokio::spawn, let alone the network.
        let dispatcher = Dispatcher::new();
        let handle = dispatcher.dispatch(&sample_record(), &EndpointConfig::disabled());

        assert!(handle.is_none());
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_without_blocking() {
        let dispatcher = Dispatcher::with_timeout(Duration::from_secs(2));
        let record = sample_record();
        // Port 9 (discard) is closed on any sane test machine.
        let endpoint = EndpointConfig::new("http://127.0.0.1:9");

        let handle = dispatcher
            .dispatch(&record, &endpoint)
            .expect("enabled endpoint must spawn a forward");

        let result = handle.await.expect("forward task must not panic");
        assert!(matches!(result, Err(ForwardError::Transport(_))));
        // The record the caller holds is untouched by the failure.
        assert_eq!(record, sample_record());
    }

    #[tokio::test]
    async fn client_rebinds_only_when_url_changes() {
        let dispatcher = Dispatcher::new();

        dispatcher.client_for("http://a.example").unwrap();
        dispatcher.client_for("http://a.example").unwrap();
        {
            let bound = dispatcher.bound.lock().unwrap();
            assert_eq!(bound.as_ref().unwrap().base_url, "http://a.example");
        }

        dispatcher.client_for("http://b.example").unwrap();
        let bound = dispatcher.bound.lock().unwrap();
        assert_eq!(bound.as_ref().unwrap().base_url, "http://b.example");
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let base = "http://localhost:3000/api/";
        let url = format!("{}/{}", base.trim_end_matches('/'), TRANSACTIONS_PATH);
        assert_eq!(url, "http://localhost:3000/api/transactions");
    }
}
