//! Outbound mail configuration.

use serde::{Deserialize, Serialize};

/// SMTP relay configuration for report-ready notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP relay hostname.
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username (empty = unauthenticated relay).
    #[serde(default)]
    pub username: String,
    /// SMTP password.
    #[serde(default)]
    pub password: String,
    /// Sender address for all outgoing mail.
    pub from_email: String,
}

fn default_smtp_port() -> u16 {
    587
}
