//! Email sender port trait
//!
//! Defines the interface for handing a message to a transactional email provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EmailError;

/// A fully rendered outgoing email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub reply_to: Option<String>,
    pub html: String,
    pub text: String,
}

/// Provider acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, EmailError>;
}
