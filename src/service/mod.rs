//! Base service shared by resource-specific GitHub services
//!
//! [`GitHubService`] owns the transport handle and provides what every
//! resource service needs:
//!
//! - request factories that apply [`RequestDefaults`]
//! - exhaustive collection of paginated resources
//! - existence checks that turn a 404 into `false`
//! - argument guards for repository ids and owner/name pairs

mod base;
mod defaults;

pub use base::GitHubService;
pub use defaults::RequestDefaults;

#[cfg(test)]
mod tests;
