use askama::Template;
use serde::Deserialize;
use validator::Validate;

use super::{Envelope, Mailer};
use crate::prelude::Result;

#[derive(Debug, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactHtml<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "contact.txt")]
struct ContactText<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl ContactMessage {
    pub fn envelope(&self) -> Result<Envelope> {
        let html = ContactHtml {
            name: &self.name,
            email: &self.email,
            subject: &self.subject,
            message: &self.message,
        }
        .render()?;
        let text = ContactText {
            name: &self.name,
            email: &self.email,
            subject: &self.subject,
            message: &self.message,
        }
        .render()?;
        Ok(Envelope {
            reply_to: Some(self.email.clone()),
            subject: format!("Portfolio Contact: {}", &self.subject),
            text,
            html,
        })
    }

    pub async fn send(&self, mailer: &Mailer) -> Result<()> {
        mailer.send(self.envelope()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hiring".into(),
            message: "<b>hello</b>\nsecond line".into(),
        }
    }

    #[test]
    fn envelope_renders_both_bodies() {
        let envelope = message().envelope().unwrap();
        assert_eq!(envelope.subject, "Portfolio Contact: Hiring");
        assert_eq!(envelope.reply_to.as_deref(), Some("ada@example.com"));
        assert!(envelope.text.contains("Name: Ada"));
        assert!(envelope.text.contains("<b>hello</b>"));
        assert!(envelope.html.contains("&lt;b&gt;hello"));
        assert!(!envelope.html.contains("<b>"));
        assert!(envelope.html.contains("mailto:ada@example.com"));
    }

    #[test]
    fn validation_flags_each_bad_field() {
        let bad = ContactMessage {
            name: String::new(),
            email: "nope".into(),
            subject: String::new(),
            message: "hi".into(),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("subject"));
        assert!(!fields.contains_key("message"));
    }
}
