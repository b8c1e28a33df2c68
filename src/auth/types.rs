//! Credential types and their application to outgoing requests

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use std::fmt;

/// Credentials sent with every request
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Anonymous access
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Personal access or OAuth2 token
    Token(String),
}

impl Credentials {
    /// Create basic credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create token credentials
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Check if any credentials are configured
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Apply credentials to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Self::None => req,
            Self::Basic { username, password } => req.basic_auth(username, Some(password)),
            Self::Token(token) => req.header(AUTHORIZATION, format!("token {token}")),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"***").finish(),
        }
    }
}
