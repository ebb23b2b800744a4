use std::time::Duration;

use crate::config::env::{optional, required, ConfigError};

pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Credentials and routing for the EmailJS template that delivers enquiries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    /// Inbox that receives every enquiry (`to_email` template field).
    pub recipient: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl EmailJsConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match optional(&lookup, "EMAILJS_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "EMAILJS_TIMEOUT_SECS",
                        value: raw,
                        reason: "expected a positive number of seconds",
                    })
                }
            },
        };

        Ok(Self {
            service_id: required(&lookup, "EMAILJS_SERVICE_ID")?,
            template_id: required(&lookup, "EMAILJS_TEMPLATE_ID")?,
            public_key: required(&lookup, "EMAILJS_PUBLIC_KEY")?,
            private_key: optional(&lookup, "EMAILJS_PRIVATE_KEY"),
            recipient: required(&lookup, "ENQUIRY_RECIPIENT")?,
            api_url: optional(&lookup, "EMAILJS_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("EMAILJS_SERVICE_ID", "service_abc"),
        ("EMAILJS_TEMPLATE_ID", "template_xyz"),
        ("EMAILJS_PUBLIC_KEY", "public-key"),
        ("ENQUIRY_RECIPIENT", "owner@example.com"),
    ];

    #[test]
    fn loads_required_values_and_defaults() {
        let config = EmailJsConfig::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.template_id, "template_xyz");
        assert_eq!(config.public_key, "public-key");
        assert_eq!(config.recipient, "owner@example.com");
        assert_eq!(config.private_key, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn reads_optional_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("EMAILJS_PRIVATE_KEY", "secret"));
        vars.push(("EMAILJS_API_URL", "http://localhost:9000/send"));
        vars.push(("EMAILJS_TIMEOUT_SECS", "3"));

        let config = EmailJsConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.private_key.as_deref(), Some("secret"));
        assert_eq!(config.api_url, "http://localhost:9000/send");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn missing_or_blank_required_value_is_an_error() {
        for (missing, _) in REQUIRED {
            let vars: Vec<(&str, &str)> = REQUIRED
                .iter()
                .map(|(k, v)| if *k == missing { (*k, "  ") } else { (*k, *v) })
                .collect();
            assert_eq!(
                EmailJsConfig::from_lookup(lookup(&vars)),
                Err(ConfigError::Missing(missing))
            );
        }
    }

    #[test]
    fn rejects_bad_timeout() {
        for bad in ["0", "ten", "-5"] {
            let mut vars = REQUIRED.to_vec();
            vars.push(("EMAILJS_TIMEOUT_SECS", bad));

            let err = EmailJsConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { name: "EMAILJS_TIMEOUT_SECS", .. }));
        }
    }
}
