//! CLI commands and argument parsing

use crate::config::{ENV_API_URL, ENV_TOKEN};
use crate::types::AcceptMediaType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GitHub service command-line client
#[derive(Parser, Debug)]
#[command(name = "github-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Access token
    #[arg(long, global = true, env = ENV_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// API root
    #[arg(long, global = true, env = ENV_API_URL)]
    pub api_url: Option<String>,

    /// Body variant to request
    #[arg(long, global = true, value_parser = parse_media_type)]
    pub accept: Option<AcceptMediaType>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether a resource exists
    Check {
        /// Resource path, e.g. /repos/rust-lang/rust
        uri: String,
    },

    /// Fetch every page of a collection
    List {
        /// Collection path, e.g. /repos/rust-lang/rust/issues
        uri: String,

        /// Elements per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Body field holding the elements (e.g. "items" for search)
        #[arg(long)]
        list_key: Option<String>,

        /// Extra query parameters as key=value
        #[arg(short, long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
}

fn parse_media_type(s: &str) -> Result<AcceptMediaType, String> {
    s.parse().map_err(|e: crate::error::Error| e.to_string())
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}
