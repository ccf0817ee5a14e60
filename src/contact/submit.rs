//! Outbound delivery of a contact form.
//!
//! The form is POSTed as JSON to a configured endpoint. Only the transport
//! outcome matters; the response body is never read.

use super::ContactFormData;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use ureq::Agent;

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No endpoint was configured for this deployment.
    #[error("no contact endpoint configured")]
    NotConfigured,

    /// The endpoint answered with a non-success status.
    #[error("contact endpoint responded with status {0}")]
    Status(u16),

    /// The request never completed (DNS, connect, TLS, timeout, ...).
    #[error("failed to reach contact endpoint: {0}")]
    Transport(#[from] ureq::Error),

    /// The delivery worker went away before reporting an outcome.
    #[error("submission worker stopped before reporting a result")]
    Interrupted,
}

/// Something that can deliver a validated form.
///
/// The UI calls this from a worker thread.
pub trait Submitter: Send + Sync + std::fmt::Debug {
    /// Deliver `data`. Blocks until the transport finishes.
    ///
    /// # Errors
    ///
    /// Returns an error when the form could not be delivered.
    fn submit(&self, data: &ContactFormData) -> Result<(), SubmitError>;
}

/// Delivers forms with an HTTP `POST`.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    endpoint: Option<String>,
    timeout: Duration,
}

impl HttpSubmitter {
    /// Create a submitter for `endpoint` with a global request timeout.
    #[must_use]
    pub const fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    /// The configured endpoint, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn agent(&self) -> Agent {
        let config = ureq::config::Config::builder()
            .timeout_global(Some(self.timeout))
            .build();
        config.new_agent()
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, data: &ContactFormData) -> Result<(), SubmitError> {
        let Some(url) = self.endpoint.as_deref() else {
            return Err(SubmitError::NotConfigured);
        };
        let user_agent = format!("folio/{}", env!("CARGO_PKG_VERSION"));

        debug!(url, "Posting contact form");
        match self
            .agent()
            .post(url)
            .header("User-Agent", user_agent)
            .send_json(data)
        {
            Ok(response) => {
                info!(status = response.status().as_u16(), "Contact form delivered");
                Ok(())
            }
            Err(ureq::Error::StatusCode(status)) => Err(SubmitError::Status(status)),
            Err(err) => Err(SubmitError::Transport(err)),
        }
    }
}
