//! # explorer-mail
//!
//! SMTP implementation of the [`Mailer`] seam using `lettre`.
//!
//! [`Mailer`]: explorer_core::traits::Mailer

pub mod smtp;

pub use smtp::SmtpMailer;
