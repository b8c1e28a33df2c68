//! Repository id capability and value type

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Something that can name a repository as `owner/name`
pub trait RepositoryIdProvider {
    /// Generate the id, or `None` if this value cannot name a repository
    fn generate_id(&self) -> Option<String>;
}

/// Owner and name of a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    /// Create an id; both parts must be non-empty
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();
        if owner.is_empty() {
            return Err(Error::invalid_argument("Owner cannot be empty"));
        }
        if name.is_empty() {
            return Err(Error::invalid_argument("Repository name cannot be empty"));
        }
        Ok(Self { owner, name })
    }

    /// Parse an `owner/name` id
    pub fn parse(id: &str) -> Result<Self> {
        match id.split_once('/') {
            Some((owner, name)) if !name.contains('/') => Self::new(owner, name),
            _ => Err(Error::invalid_argument(format!(
                "Repository id '{id}' must be of the form owner/name"
            ))),
        }
    }

    /// Extract the id from a repository URL such as
    /// `https://github.com/octo/hello.git`
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)?;
        let mut segments = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());

        let (Some(owner), Some(name)) = (segments.next(), segments.next()) else {
            return Err(Error::invalid_argument(format!(
                "URL '{url}' does not name a repository"
            )));
        };
        let name = name.strip_suffix(".git").unwrap_or(name);
        Self::new(owner, name)
    }

    /// Repository owner (user or organization login)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl RepositoryIdProvider for RepositoryId {
    fn generate_id(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
