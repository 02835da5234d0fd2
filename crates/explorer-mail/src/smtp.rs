//! SMTP mailer over an async `lettre` transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use explorer_core::config::MailConfig;
use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::traits::mailer::Mailer;

/// Mailer that delivers plain-text messages through an SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer").field("from", &self.from).finish()
    }
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let from: Mailbox = config.from_email.parse().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid sender address '{}'", config.from_email),
                e,
            )
        })?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Mail,
                    format!("Failed to build SMTP transport for '{}'", config.smtp_host),
                    e,
                )
            })?
            .port(config.smtp_port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let recipient: Mailbox = to.parse().map_err(|e| {
            AppError::with_source(
                ErrorKind::Validation,
                format!("Invalid recipient address '{to}'"),
                e,
            )
        })?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| {
                AppError::with_source(ErrorKind::Mail, "Failed to build message", e)
            })?;

        self.transport.send(message).await.map_err(|e| {
            AppError::with_source(ErrorKind::Mail, format!("Failed to send mail to '{to}'"), e)
        })?;

        tracing::debug!(to, subject, "Mail sent");
        Ok(())
    }
}
