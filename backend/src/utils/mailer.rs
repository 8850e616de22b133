use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SmtpSettings;

/// Upper bound for one SMTP send.
pub const SMTP_TIMEOUT: Duration = Duration::from_secs(15);

/// A validated, trimmed contact submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("could not build e-mail: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Forwards contact submissions to the agency inbox.
pub trait ContactMailer: Send + Sync {
    fn send(&self, message: ContactMessage) -> BoxFuture<'static, Result<(), MailError>>;
}

pub fn subject_line(message: &ContactMessage) -> String {
    match &message.company {
        Some(company) => format!("Ny förfrågan från {} ({})", message.name, company),
        None => format!("Ny förfrågan från {}", message.name),
    }
}

pub fn body_text(message: &ContactMessage) -> String {
    format!(
        "Namn: {}\nE-post: {}\nFöretag: {}\nMottaget: {}\n\n{}\n",
        message.name,
        message.email,
        message.company.as_deref().unwrap_or("-"),
        message.received_at.format("%Y-%m-%d %H:%M UTC"),
        message.message,
    )
}

/// Builds the inbox e-mail. Replies go to the sender when their address
/// parses; otherwise it is only in the body.
pub fn compose(from: &Mailbox, to: &Mailbox, message: &ContactMessage) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(subject_line(message))
        .header(ContentType::TEXT_PLAIN);

    match message.email.parse::<Address>() {
        Ok(address) => builder = builder.reply_to(Mailbox::new(Some(message.name.clone()), address)),
        Err(e) => debug!("No reply-to for {}: {}", message.email, e),
    }

    Ok(builder.body(body_text(message))?)
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings, sender: &str, inbox: &str) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .with_context(|| format!("invalid SMTP host {}", settings.host))?
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            from: sender
                .parse()
                .with_context(|| format!("CONTACT_SENDER is not a mailbox: {}", sender))?,
            to: inbox
                .parse()
                .with_context(|| format!("CONTACT_INBOX is not a mailbox: {}", inbox))?,
        })
    }
}

impl ContactMailer for SmtpMailer {
    fn send(&self, message: ContactMessage) -> BoxFuture<'static, Result<(), MailError>> {
        let transport = self.transport.clone();
        let email = compose(&self.from, &self.to, &message);
        async move {
            let response = transport.send(email?).await?;
            debug!("SMTP accepted contact message: {:?}", response.code());
            Ok(())
        }
        .boxed()
    }
}

/// Development stand-in that only logs the message.
pub struct LogMailer;

impl ContactMailer for LogMailer {
    fn send(&self, message: ContactMessage) -> BoxFuture<'static, Result<(), MailError>> {
        info!(
            "Contact message (not sent): {}\n{}",
            subject_line(&message),
            body_text(&message)
        );
        futures::future::ready(Ok(())).boxed()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use lettre::message::header::ReplyTo;

    use super::*;

    fn message(email: &str, company: Option<&str>) -> ContactMessage {
        ContactMessage {
            name: "Lisa".to_string(),
            email: email.to_string(),
            company: company.map(str::to_string),
            message: "Vi vill ha en ny hemsida.".to_string(),
            received_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        }
    }

    fn mailboxes() -> (Mailbox, Mailbox) {
        (
            "Websives <no-reply@websives.com>".parse().unwrap(),
            "info@websives.com".parse().unwrap(),
        )
    }

    #[test]
    fn subject_mentions_company_when_given() {
        assert_eq!(subject_line(&message("l@yoga.se", None)), "Ny förfrågan från Lisa");
        assert_eq!(
            subject_line(&message("l@yoga.se", Some("Yoga AB"))),
            "Ny förfrågan från Lisa (Yoga AB)"
        );
    }

    #[test]
    fn body_lists_fields_and_timestamp() {
        let body = body_text(&message("l@yoga.se", None));
        assert!(body.contains("E-post: l@yoga.se"));
        assert!(body.contains("Företag: -"));
        assert!(body.contains("2025-03-14 09:30 UTC"));
        assert!(body.ends_with("Vi vill ha en ny hemsida.\n"));
    }

    #[test]
    fn reply_to_is_set_for_parseable_addresses() {
        let (from, to) = mailboxes();
        let email = compose(&from, &to, &message("lisa@yoga.se", None)).unwrap();
        assert!(email.headers().get::<ReplyTo>().is_some());
    }

    #[test]
    fn unparseable_address_still_composes() {
        let (from, to) = mailboxes();
        let email = compose(&from, &to, &message("lisa@@yoga.se", None)).unwrap();
        assert!(email.headers().get::<ReplyTo>().is_none());
    }

    #[tokio::test]
    async fn log_mailer_always_succeeds() {
        assert!(LogMailer.send(message("l@yoga.se", None)).await.is_ok());
    }
}
