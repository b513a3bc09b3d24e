//! Resend API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::{EmailSender, OutboundEmail, SentEmail};
use crate::error::EmailError;

/// Implementation of the email sender on top of Resend
pub struct ResendEmailSender {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ResendEmailSender {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, EmailError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| EmailError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(EmailError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(EmailError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(EmailError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request body for POST /emails
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, EmailError> {
        let body = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            reply_to: email.reply_to.as_deref(),
            html: &email.html,
            text: &email.text,
        };

        let response = self
            .http
            .post(self.api_url("/emails"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let sent: SendEmailResponse = self.handle_response(response).await?;
        Ok(SentEmail { id: sent.id })
    }
}

/// Email sender that only logs - used when no API key is configured
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, EmailError> {
        let id = Uuid::new_v4().to_string();
        tracing::info!(
            id = %id,
            subject = %email.subject,
            recipients = email.to.len(),
            "Email delivery disabled, message logged only"
        );
        Ok(SentEmail { id })
    }
}
