//! Resend adapter
//!
//! Email delivery through the Resend HTTP API.

pub mod client;

pub use client::{LogEmailSender, ResendEmailSender};
