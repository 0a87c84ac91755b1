//! wfhook
//!
//! Trigger workflow-automation services through their webhooks, and run a
//! local mock of such a webhook for development and tests.
//!
//! - [`client`]: outbound trigger client returning uniform envelopes
//! - [`mock`]: the mock endpoint (axum router + server)
//! - [`config`]: file and environment configuration

pub mod cli;
pub mod client;
pub mod config;
pub mod execution_id;
pub mod json;
pub mod mock;
pub mod runner;
pub mod util;
