use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub mod contact;

use crate::{
    conf::SmtpSettings,
    prelude::{Error, Result},
};

/// Outgoing mail with both plain and html bodies.
pub struct Envelope {
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Clone)]
pub struct Mailer {
    from: Mailbox,
    to: Mailbox,
    transport: SmtpTransport,
}

impl Mailer {
    pub fn new(smtp: &SmtpSettings) -> Result<Self> {
        let from = format!("{} <{}>", &smtp.service_name, &smtp.from_email)
            .parse::<Mailbox>()
            .map_err(|e| Error::Misconfigured(format!("from_email: {e}")))?;
        let to = smtp
            .recipient
            .parse::<Mailbox>()
            .map_err(|e| Error::Misconfigured(format!("contact_recipient: {e}")))?;
        let mut builder = SmtpTransport::relay(&smtp.server)
            .map_err(|e| Error::Misconfigured(format!("smtp_server: {e}")))?;
        if let Some(port) = smtp.port {
            builder = builder.port(port);
        }
        if let (Some(user), Some(pass)) = (&smtp.user, &smtp.pass) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }
        Ok(Mailer {
            from,
            to,
            transport: builder.build(),
        })
    }

    pub async fn send(&self, envelope: Envelope) -> Result<()> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(envelope.subject);
        if let Some(reply_to) = envelope.reply_to {
            let mailbox = reply_to
                .parse::<Mailbox>()
                .map_err(|e| Error::Mail(e.to_string()))?;
            builder = builder.reply_to(mailbox);
        }
        let message = builder
            .multipart(MultiPart::alternative_plain_html(envelope.text, envelope.html))
            .map_err(|e| Error::Mail(e.to_string()))?;

        tracing::debug!("sending email to {}", &self.to);
        let transport = self.transport.clone();
        tokio::task::spawn_blocking(move || transport.send(&message))
            .await?
            .map_err(|e| Error::Mail(e.to_string()))?;
        tracing::info!("email relayed to {}", &self.to);
        Ok(())
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp(recipient: &str) -> SmtpSettings {
        SmtpSettings {
            server: "smtp.example.com".into(),
            port: Some(587),
            user: Some("user".into()),
            pass: Some("pass".into()),
            from_email: "site@example.com".into(),
            recipient: recipient.into(),
            service_name: "portfolio".into(),
        }
    }

    #[test]
    fn builds_from_valid_settings() {
        let mailer = Mailer::new(&smtp("me@example.com")).unwrap();
        assert_eq!(mailer.to.email.to_string(), "me@example.com");
        assert_eq!(mailer.from.name.as_deref(), Some("portfolio"));
    }

    #[test]
    fn rejects_bad_recipient() {
        assert!(matches!(
            Mailer::new(&smtp("not an address")),
            Err(Error::Misconfigured(_))
        ));
    }
}
