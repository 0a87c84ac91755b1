// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trigger workflow-automation webhooks, or run a local mock of one.
///
/// `wfhook.yaml` and the environment (`WEBHOOK_BASE_URL`) provide defaults.
/// CLI flags only override them.
#[derive(Parser, Debug)]
#[command(name = "wfhook", version, disable_help_subcommand = true)]
pub struct Cli {
    /// Path to config file
    ///
    /// A missing file is fine unless the path was given explicitly.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Default config file, used when `--config` is not passed.
pub const DEFAULT_CONFIG: &str = "wfhook.yaml";

/// All supported CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the mock workflow endpoint.
    Serve {
        /// Listen address, e.g. 127.0.0.1:3000
        #[arg(long)]
        addr: Option<String>,

        /// Simulated processing delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Trigger a single workflow and print the response envelope.
    Trigger {
        /// Workflow identifier appended to the base URL
        workflow_id: String,

        /// Inline JSON data (defaults to `{}`)
        #[arg(long, conflicts_with = "data_file")]
        data: Option<String>,

        /// Read JSON data from a file
        #[arg(long)]
        data_file: Option<PathBuf>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Trigger several workflows concurrently.
    ///
    /// The file holds a JSON array of `{ "workflowId": ..., "data": ... }`.
    Batch {
        file: PathBuf,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Report whether a webhook base URL is configured.
    Status,

    /// Start a throwaway mock endpoint and trigger the `test` workflow on it.
    Demo {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },
}

/// Overrides for where and how triggers are sent.
#[derive(clap::Args, Debug, Default)]
pub struct TargetArgs {
    /// Override the webhook base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}
