//! Email Dispatch
//!
//! Sends contact-form submissions to a transactional email service.
//!
//! The [`EmailDispatcher`] trait keeps the form independent of the provider;
//! [`EmailJsDispatcher`] talks to the EmailJS REST API:
//!
//! ```text
//! POST https://api.emailjs.com/api/v1.0/email/send
//! {
//!   "service_id": "...", "template_id": "...", "user_id": "<public key>",
//!   "template_params": { "from_name": "...", "from_email": "...", "message": "..." }
//! }
//! ```
//!
//! One attempt per call: no retries, no request timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailConfig;
use crate::contact::TemplateParams;

/// Errors from a dispatch attempt
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required configuration value is absent or empty
    #[error("email dispatch is not configured: missing {0}")]
    MissingConfig(&'static str),

    /// The request never got a response
    #[error("email dispatch request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Something that can deliver a contact message
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    /// Provider name, for logs
    fn name(&self) -> &'static str;

    /// Deliver one message. No response body is returned.
    async fn send(&self, params: &TemplateParams) -> Result<(), DispatchError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS REST client
#[derive(Clone)]
pub struct EmailJsDispatcher {
    config: EmailConfig,
    http_client: reqwest::Client,
}

impl EmailJsDispatcher {
    pub fn new(config: EmailConfig) -> Result<Self, DispatchError> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, DispatchError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(DispatchError::MissingConfig(name))
}

#[async_trait]
impl EmailDispatcher for EmailJsDispatcher {
    fn name(&self) -> &'static str {
        "EmailJS"
    }

    async fn send(&self, params: &TemplateParams) -> Result<(), DispatchError> {
        let request = EmailJsRequest {
            service_id: required(&self.config.service_id, "service_id")?,
            template_id: required(&self.config.template_id, "template_id")?,
            user_id: required(&self.config.public_key, "public_key")?,
            template_params: params,
        };

        tracing::debug!(endpoint = %self.config.endpoint, "dispatching contact message");

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DispatchError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params() -> TemplateParams {
        TemplateParams {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn config_for(server: &MockServer) -> EmailConfig {
        EmailConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
            endpoint: format!("{}/api/v1.0/email/send", server.uri()),
        }
    }

    #[tokio::test]
    async fn test_send_posts_emailjs_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_json(serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello",
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = EmailJsDispatcher::new(config_for(&server)).unwrap();
        tokio_test::assert_ok!(dispatcher.send(&params()).await);
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The Public Key is invalid"))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = EmailJsDispatcher::new(config_for(&server)).unwrap();
        let err = tokio_test::assert_err!(dispatcher.send(&params()).await);

        match err {
            DispatchError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The Public Key is invalid");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_config_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.template_id = Some("  ".to_string());
        let dispatcher = EmailJsDispatcher::new(config).unwrap();

        let err = dispatcher.send(&params()).await.unwrap_err();
        assert!(matches!(err, DispatchError::MissingConfig("template_id")));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let config = EmailConfig {
            service_id: Some("s".to_string()),
            template_id: Some("t".to_string()),
            public_key: Some("k".to_string()),
            endpoint: "http://127.0.0.1:1/api/v1.0/email/send".to_string(),
        };
        let dispatcher = EmailJsDispatcher::new(config).unwrap();

        let err = dispatcher.send(&params()).await.unwrap_err();
        assert!(matches!(err, DispatchError::Network(_)));
    }
}
