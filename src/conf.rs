use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    pub admin_password: String,
    pub body_limit_bytes: usize,
    pub trust_proxy: bool,
    //contact
    pub contact_rate_limit_max: u32,
    pub contact_rate_limit_window_secs: u64,
    pub contact_recipient: Option<String>,
    //email
    pub from_email: Option<String>,
    pub smtp_server: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::default())
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "portfolio")?
            .set_default("listen_port", "5000")?
            .set_default("database_pool_max_connections", 10)?
            .set_default("body_limit_bytes", 50 * 1024 * 1024)?
            .set_default("trust_proxy", false)?
            .set_default("contact_rate_limit_max", 5)?
            .set_default("contact_rate_limit_window_secs", 15 * 60)?
            .add_source(env)
            .build()?;
        let s: Settings = conf.try_deserialize()?;
        if s.admin_password.is_empty() {
            return Err(ConfigError::Message("admin_password must not be empty".into()));
        }
        Ok(s)
    }

    /// Relay settings, present only when server, sender and recipient are all set.
    pub fn smtp(&self) -> Option<SmtpSettings> {
        Some(SmtpSettings {
            server: self.smtp_server.clone().filter(|s| !s.is_empty())?,
            port: self.smtp_port,
            user: self.smtp_user.clone(),
            pass: self.smtp_pass.clone(),
            from_email: self.from_email.clone().filter(|s| !s.is_empty())?,
            recipient: self.contact_recipient.clone().filter(|s| !s.is_empty())?,
            service_name: self.service_name.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub server: String,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub from_email: String,
    pub recipient: String,
    pub service_name: String,
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(source))
    }

    #[test]
    fn defaults_fill_optional_keys() {
        let s = Settings::from_env(env(&[
            ("DATABASE_URL", "postgres://localhost/portfolio"),
            ("ADMIN_PASSWORD", "hunter2"),
        ]))
        .unwrap();
        assert_eq!(s.listen_port, "5000");
        assert_eq!(s.contact_rate_limit_max, 5);
        assert_eq!(s.contact_rate_limit_window_secs, 900);
        assert!(!s.trust_proxy);
        assert!(s.smtp().is_none());
    }

    #[test]
    fn missing_admin_password_is_rejected() {
        assert!(Settings::from_env(env(&[("DATABASE_URL", "postgres://localhost/p")])).is_err());
        assert!(
            Settings::from_env(env(&[
                ("DATABASE_URL", "postgres://localhost/p"),
                ("ADMIN_PASSWORD", ""),
            ]))
            .is_err()
        );
    }

    #[test]
    fn smtp_needs_server_sender_and_recipient() {
        let s = Settings::from_env(env(&[
            ("DATABASE_URL", "postgres://localhost/p"),
            ("ADMIN_PASSWORD", "x"),
            ("SMTP_SERVER", "smtp.example.com"),
            ("FROM_EMAIL", "site@example.com"),
        ]))
        .unwrap();
        assert!(s.smtp().is_none());

        let s = Settings::from_env(env(&[
            ("DATABASE_URL", "postgres://localhost/p"),
            ("ADMIN_PASSWORD", "x"),
            ("SMTP_SERVER", "smtp.example.com"),
            ("FROM_EMAIL", "site@example.com"),
            ("CONTACT_RECIPIENT", "me@example.com"),
        ]))
        .unwrap();
        assert_eq!(s.smtp().unwrap().recipient, "me@example.com");
    }
}
