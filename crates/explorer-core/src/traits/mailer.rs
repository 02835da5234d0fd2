//! Mailer trait for outbound notification mail.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for the mail delivery service.
///
/// Implemented in `explorer-mail` over an SMTP relay. Messages are
/// plain-text only.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Send a plain-text email to a single recipient.
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;
}
