//! Submission clients: one capability, two implementations, selected from
//! the endpoint configuration at construction time.

use mraya_order::{Endpoint, OrderPayload, SubmissionError, SubmissionOutcome};

/// Delay used by the simulated client before reporting success.
pub const SIMULATED_DELAY_MS: i32 = 1500;

/// One best-effort submission attempt. Implementations must not retry;
/// failure reporting is the caller's job.
pub trait SubmissionClient {
    #[allow(async_fn_in_trait)] // Single-threaded wasm UI; no `Send` bound wanted.
    async fn submit(&self, payload: &OrderPayload) -> SubmissionOutcome;
}

/// Endpoint configured at compile time, or the placeholder when absent.
#[must_use]
pub fn configured_endpoint() -> Endpoint {
    Endpoint::from_setting(option_env!("ORDER_WEBHOOK_URL"))
}

/// Dev/demo fallback used while no webhook is configured: waits a fixed
/// delay, then reports success unconditionally. Not a production path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedClient {
    pub delay_ms: i32,
}

impl Default for SimulatedClient {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_DELAY_MS,
        }
    }
}

impl SubmissionClient for SimulatedClient {
    async fn submit(&self, _payload: &OrderPayload) -> SubmissionOutcome {
        log::info!("simulating order submission; no webhook URL is configured");
        #[cfg(target_arch = "wasm32")]
        if let Err(err) = crate::dom::sleep_ms(self.delay_ms).await {
            crate::dom::console_error(&crate::dom::js_error_message(&err));
        }
        SubmissionOutcome::Success
    }
}

/// Real client: one POST of the form-encoded payload to the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookClient {
    pub url: String,
}

impl SubmissionClient for WebhookClient {
    async fn submit(&self, payload: &OrderPayload) -> SubmissionOutcome {
        match crate::dom::post_form(&self.url, &payload.fields()).await {
            Ok(response) if response.ok() => SubmissionOutcome::Success,
            Ok(response) => {
                let status = response.status();
                log::warn!("webhook rejected order submission with status {status}");
                SubmissionOutcome::Failure(SubmissionError::Rejected { status })
            }
            Err(err) => {
                let detail = crate::dom::js_error_message(&err);
                crate::dom::console_error(&format!("order submission failed: {detail}"));
                SubmissionOutcome::Failure(SubmissionError::Network { detail })
            }
        }
    }
}

/// The client the home page uses, picked from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Client {
    Simulated(SimulatedClient),
    Webhook(WebhookClient),
}

impl Client {
    #[must_use]
    pub fn from_endpoint(endpoint: &Endpoint) -> Self {
        match endpoint {
            Endpoint::Unset => Self::Simulated(SimulatedClient::default()),
            Endpoint::Url(url) => Self::Webhook(WebhookClient { url: url.clone() }),
        }
    }
}

impl SubmissionClient for Client {
    async fn submit(&self, payload: &OrderPayload) -> SubmissionOutcome {
        match self {
            Self::Simulated(client) => client.submit(payload).await,
            Self::Webhook(client) => client.submit(payload).await,
        }
    }
}
