use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
const DEFAULT_INBOX: &str = "info@websives.com";
const DEFAULT_SENDER: &str = "Websives <no-reply@websives.com>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    /// `development` locally, anything else in production.
    pub environment: String,
    pub contact_inbox: String,
    pub contact_sender: String,
    pub smtp: Option<SmtpSettings>,
    pub sentry_dsn: Option<String>,
    /// Peers allowed to set `X-Forwarded-For`. Empty means the header is
    /// ignored.
    pub trusted_proxies: Vec<IpAddr>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = get("ENVIRONMENT").context("ENVIRONMENT must be set")?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a valid socket address")?;

        let smtp = match (get("SMTP_HOST"), get("SMTP_USERNAME"), get("SMTP_PASSWORD")) {
            (Some(host), Some(username), Some(password)) => Some(SmtpSettings {
                host,
                username,
                password,
            }),
            (None, None, None) => None,
            _ => bail!("SMTP_HOST, SMTP_USERNAME and SMTP_PASSWORD must be set together"),
        };

        let trusted_proxies = get("TRUSTED_PROXIES")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|ip| !ip.is_empty())
                    .map(|ip| {
                        ip.parse::<IpAddr>()
                            .with_context(|| format!("TRUSTED_PROXIES has an invalid address: {}", ip))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            bind_addr,
            frontend_dist: PathBuf::from(
                get("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string()),
            ),
            environment,
            contact_inbox: get("CONTACT_INBOX").unwrap_or_else(|| DEFAULT_INBOX.to_string()),
            contact_sender: get("CONTACT_SENDER").unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            smtp,
            sentry_dsn: get("SENTRY_DSN"),
            trusted_proxies,
        };

        if config.smtp.is_none() && !config.is_development() {
            bail!("SMTP settings are required outside development");
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn development_without_smtp_uses_defaults() {
        let config = Config::from_lookup(lookup(&[("ENVIRONMENT", "development")])).unwrap();
        assert!(config.is_development());
        assert!(config.smtp.is_none());
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.frontend_dist, PathBuf::from("../frontend/dist"));
        assert_eq!(config.contact_inbox, "info@websives.com");
        assert_eq!(config.sentry_dsn, None);
        assert!(config.trusted_proxies.is_empty());
    }

    #[test]
    fn trusted_proxies_are_parsed_and_checked() {
        let config = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "development"),
            ("TRUSTED_PROXIES", "127.0.0.1, ::1"),
        ]))
        .unwrap();
        assert_eq!(
            config.trusted_proxies,
            vec!["127.0.0.1".parse::<IpAddr>().unwrap(), "::1".parse().unwrap()]
        );

        assert!(Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "development"),
            ("TRUSTED_PROXIES", "127.0.0.1,proxy.local"),
        ]))
        .is_err());
    }

    #[test]
    fn production_requires_smtp() {
        let err = Config::from_lookup(lookup(&[("ENVIRONMENT", "production")])).unwrap_err();
        assert!(err.to_string().contains("SMTP"));
    }

    #[test]
    fn partial_smtp_settings_are_rejected() {
        let result = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "development"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "user"),
            ("SMTP_PASSWORD", "  "),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn production_with_full_settings() {
        let config = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("FRONTEND_DIST", "/srv/websives"),
            ("CONTACT_INBOX", "hej@websives.com"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "user"),
            ("SMTP_PASSWORD", "secret"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ]))
        .unwrap();
        assert!(!config.is_development());
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.frontend_dist, PathBuf::from("/srv/websives"));
        assert_eq!(config.contact_inbox, "hej@websives.com");
        assert_eq!(
            config.smtp,
            Some(SmtpSettings {
                host: "smtp.example.com".to_string(),
                username: "user".to_string(),
                password: "secret".to_string(),
            })
        );
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn missing_environment_and_bad_address_fail() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
        assert!(Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "development"),
            ("BIND_ADDR", "not an address"),
        ]))
        .is_err());
    }
}
