//! Basic-authentication credentials embedded in a URI authority.

use std::fmt;

/// Username/password pair for the userinfo part of an absolute URI.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasicAuthentication {
    pub username: String,
    pub password: String,
}

impl BasicAuthentication {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Renders as `username:password`; the rendering never includes the
/// trailing `@`, which belongs to the authority assembly.
impl fmt::Display for BasicAuthentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.username, self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_username_and_password() {
        let auth = BasicAuthentication::new("username", "password");
        assert_eq!(auth.username, "username");
        assert_eq!(auth.password, "password");
    }

    #[test]
    fn renders_colon_separated() {
        let auth = BasicAuthentication::new("username", "password");
        assert_eq!(auth.to_string(), "username:password");
    }
}
