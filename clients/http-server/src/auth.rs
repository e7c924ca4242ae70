use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::{load_admin_password, ConfigError};

pub const ADMIN_USERNAME: &str = "admin";

const BASIC_PREFIX: &str = "basic ";

/// Username / password pair taken from an `Authorization: Basic ...` header
#[derive(Debug, PartialEq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parses the header value, `None` when it is not well formed basic auth
    pub fn parse(header: &str) -> Option<Self> {
        let scheme = header.get(..BASIC_PREFIX.len())?;

        if !scheme.eq_ignore_ascii_case(BASIC_PREFIX) {
            return None;
        }

        let decoded = STANDARD.decode(&header[BASIC_PREFIX.len()..]).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(BasicCredentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Stateless credential check for the admin portal, holds the secret read at startup
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub fn new(password: String) -> Result<Self, ConfigError> {
        if password.is_empty() {
            return Err(ConfigError::MissingAdminPassword);
        }

        Ok(Self { password })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(load_admin_password()?)
    }

    pub fn verify(&self, credentials: Option<&BasicCredentials>) -> bool {
        match credentials {
            Some(credentials) => {
                // Evaluate both so a wrong username costs the same as a wrong password
                let username_matches = constant_time_eq(&credentials.username, ADMIN_USERNAME);
                let password_matches = constant_time_eq(&credentials.password, &self.password);

                username_matches & password_matches
            }
            None => false,
        }
    }
}

/// Constant-time string comparison, only the length is leaked
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_header(username: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
    }

    #[test]
    fn parses_basic_header() {
        let credentials = BasicCredentials::parse(&basic_header("admin", "pa:ss"));

        assert_eq!(
            credentials,
            Some(BasicCredentials {
                username: "admin".to_string(),
                password: "pa:ss".to_string(),
            })
        );
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let header = basic_header("admin", "secret").replacen("Basic", "BASIC", 1);

        assert!(BasicCredentials::parse(&header).is_some());
    }

    #[test]
    fn rejects_malformed_headers() {
        assert_eq!(BasicCredentials::parse("Bearer abc"), None);
        assert_eq!(BasicCredentials::parse("Basic !!not-base64!!"), None);
        assert_eq!(
            BasicCredentials::parse(&format!("Basic {}", STANDARD.encode("no-colon"))),
            None
        );
        assert_eq!(BasicCredentials::parse(""), None);
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert!(matches!(
            AdminGate::new(String::new()),
            Err(ConfigError::MissingAdminPassword)
        ));
    }

    #[test]
    fn verifies_credentials() {
        let gate = AdminGate::new("secret".to_string()).expect("secret is set");

        let good = BasicCredentials::parse(&basic_header("admin", "secret"));
        let wrong_password = BasicCredentials::parse(&basic_header("admin", "nope"));
        let wrong_user = BasicCredentials::parse(&basic_header("root", "secret"));

        assert!(gate.verify(good.as_ref()));
        assert!(!gate.verify(wrong_password.as_ref()));
        assert!(!gate.verify(wrong_user.as_ref()));
        assert!(!gate.verify(None));
    }
}
