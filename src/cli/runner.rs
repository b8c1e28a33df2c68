//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::http::GitHubClient;
use crate::service::GitHubService;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let service = self.service()?;

        match &self.cli.command {
            Commands::Check { uri } => {
                let exists = service.check(uri).await?;
                println!("{}", if exists { "exists" } else { "missing" });
            }
            Commands::List {
                uri,
                page_size,
                list_key,
                params,
            } => {
                let mut request = match page_size {
                    Some(size) => {
                        service.create_paged_request_with(service.defaults().start_page, *size)
                    }
                    None => service.create_paged_request(),
                }
                .with_uri(uri.as_str());
                if let Some(key) = list_key {
                    request = request.with_list_key(key.as_str());
                }
                for (key, value) in params {
                    request = request.with_param(key.as_str(), value.as_str());
                }

                let elements: Vec<Value> = service.get_all(request).await?;
                info!("Fetched {} elements from {}", elements.len(), uri);
                println!("{}", serde_json::to_string_pretty(&elements)?);
            }
        }

        if self.cli.verbose {
            if let Some(remaining) = service.client().remaining_requests() {
                eprintln!("Remaining requests: {remaining}");
            }
        }

        Ok(())
    }

    /// Resolve settings: file, then environment, then flags
    pub fn settings(&self) -> Result<Settings> {
        let settings = match &self.cli.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let mut settings = settings
            .with_env_overrides()
            .with_overrides(self.cli.token.clone(), self.cli.api_url.clone());
        if self.cli.accept.is_some() {
            settings.accept = self.cli.accept;
        }
        settings.validate()?;
        Ok(settings)
    }

    fn service(&self) -> Result<GitHubService> {
        let settings = self.settings()?;
        let client = GitHubClient::with_config(settings.client_config())?;
        Ok(GitHubService::new(Arc::new(client)).with_defaults(settings.request_defaults()))
    }
}
