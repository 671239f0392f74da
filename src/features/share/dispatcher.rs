//! # Webhook Dispatcher
//!
//! Sends payloads to the webhook one request at a time, in order. The first
//! failed part stops the run; parts already delivered stay in the channel.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use std::sync::Arc;
use uuid::Uuid;

use super::payload::Payload;
use crate::core::{DeliveryFailure, ShareError};

/// Status Discord answers a successful webhook execution with
pub const SUCCESS_STATUS: u16 = 204;

/// Raw outcome of one HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one JSON body to the webhook endpoint
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Errors are transport-level failures (unreachable host, TLS, I/O)
    async fn post_json(&self, url: &Url, body: String) -> Result<TransportResponse>;
}

/// reqwest-backed transport. No request timeout is set.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Use a preconfigured client (proxy, TLS or pool settings)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(&self, url: &Url, body: String) -> Result<TransportResponse> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        // Body is diagnostics only
        let body = if status == StatusCode::NO_CONTENT {
            String::new()
        } else {
            response.text().await.unwrap_or_else(|e| {
                warn!("Failed to read webhook response body (status {}): {}", status, e);
                String::new()
            })
        };

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Delivers the payloads of one share operation
pub struct Dispatcher {
    transport: Arc<dyn WebhookTransport>,
    endpoint: Url,
    share_id: Uuid,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn WebhookTransport>, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
            share_id: Uuid::new_v4(),
        }
    }

    /// Tag log lines with an existing share id
    pub fn with_share_id(mut self, share_id: Uuid) -> Self {
        self.share_id = share_id;
        self
    }

    /// Send a single payload; success only on status 204
    pub async fn deliver(&self, payload: &Payload) -> Result<(), DeliveryFailure> {
        let body = payload
            .to_json()
            .map_err(|e| DeliveryFailure::Serialize(e.to_string()))?;

        let response = self
            .transport
            .post_json(&self.endpoint, body)
            .await
            .map_err(|e| DeliveryFailure::Transport(format!("{e:#}")))?;

        if response.status == SUCCESS_STATUS {
            Ok(())
        } else {
            Err(DeliveryFailure::Status {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// Send every payload in order, awaiting each before the next.
    ///
    /// Returns the number of delivered parts. On failure nothing after the
    /// failing part is sent.
    pub async fn deliver_all(&self, payloads: &[Payload]) -> Result<usize, ShareError> {
        let total = payloads.len();

        for (index, payload) in payloads.iter().enumerate() {
            let part = index + 1;
            debug!("[{}] Sending part {}/{}", self.share_id, part, total);

            if let Err(reason) = self.deliver(payload).await {
                error!(
                    "[{}] Part {}/{} failed: {}",
                    self.share_id, part, total, reason
                );
                return Err(ShareError::Delivery {
                    part,
                    total,
                    reason,
                });
            }
        }

        info!("[{}] Delivered {} part(s)", self.share_id, total);
        Ok(total)
    }
}
