//! Contact service
//!
//! Handles contact form submissions: rate limit, validate, render and send.

use std::sync::Arc;

use crate::domain::entities::{ContactMessage, ContactReceipt};
use crate::domain::ports::{EmailSender, OutboundEmail, RateLimiter};
use crate::error::AppError;
use crate::render::render_contact_email;

/// Where contact notifications go
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub from: String,
    pub to: Vec<String>,
}

/// Service for delivering contact messages
pub struct ContactService {
    limiter: Arc<dyn RateLimiter>,
    mailer: Arc<dyn EmailSender>,
    settings: ContactSettings,
}

impl ContactService {
    pub fn new(
        limiter: Arc<dyn RateLimiter>,
        mailer: Arc<dyn EmailSender>,
        settings: ContactSettings,
    ) -> Self {
        Self {
            limiter,
            mailer,
            settings,
        }
    }

    /// Submit a contact message on behalf of `client_key` (the client IP).
    ///
    /// The limiter is consulted before validation, so rejected submissions
    /// still count against the client's window.
    pub async fn submit(
        &self,
        client_key: &str,
        message: &ContactMessage,
    ) -> Result<ContactReceipt, AppError> {
        let decision = self.limiter.limit(client_key).await?;
        if !decision.success {
            tracing::warn!(client = %client_key, reset = %decision.reset, "Contact rate limit exceeded");
            return Err(AppError::RateLimited {
                limit: decision.limit,
                remaining: decision.remaining,
                reset: decision.reset,
            });
        }

        let message = message.trimmed();
        message.validate()?;

        let rendered = render_contact_email(&message);
        let email = OutboundEmail {
            from: self.settings.from.clone(),
            to: self.settings.to.clone(),
            subject: rendered.subject,
            reply_to: Some(message.email.clone()),
            html: rendered.html,
            text: rendered.text,
        };

        let sent = self.mailer.send(&email).await?;
        tracing::info!(
            id = %sent.id,
            remaining = decision.remaining,
            "Contact message sent"
        );

        Ok(ContactReceipt {
            id: sent.id,
            remaining: decision.remaining,
        })
    }
}
