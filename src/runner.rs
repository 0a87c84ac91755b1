// src/runner.rs

use crate::cli::{Cli, Command, TargetArgs, DEFAULT_CONFIG};
use crate::client::{TriggerRequest, WorkflowClient, WorkflowResponse};
use crate::config::{ClientConfig, Config};
use crate::json::iso_now;
use crate::mock::{self, MockState, MOCK_BASE_PATH, MOCK_WORKFLOW_ID};
use crate::util::{parse_json_arg, read_json};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Entry point from `main.rs`.
pub async fn run(cli: Cli) -> Result<()> {
    let mut cfg = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { addr, delay_ms } => {
            if let Some(addr) = addr {
                cfg.server.addr = addr;
            }
            if let Some(ms) = delay_ms {
                cfg.server.delay_ms = ms;
            }
            mock::serve(&cfg.server).await
        }

        Command::Trigger {
            workflow_id,
            data,
            data_file,
            target,
        } => {
            apply_target(&mut cfg.client, target);

            let data: Value = match (data, data_file) {
                (Some(raw), _) => parse_json_arg(&raw)?,
                (None, Some(path)) => read_json(&path)?,
                (None, None) => json!({}),
            };

            let client = WorkflowClient::new(cfg.client);
            let response = client.trigger(&workflow_id, data).await;
            print_json(&response)?;

            if !response.success {
                bail!("Workflow trigger failed");
            }
            Ok(())
        }

        Command::Batch { file, target } => {
            apply_target(&mut cfg.client, target);

            let requests: Vec<TriggerRequest> = read_json(&file)?;
            let total = requests.len();

            let client = WorkflowClient::new(cfg.client);
            let responses = client.trigger_all(requests).await;
            print_json(&responses)?;

            let failed = count_failed(&responses);
            if failed > 0 {
                bail!("{} of {} workflow triggers failed", failed, total);
            }
            Ok(())
        }

        Command::Status => {
            let client = WorkflowClient::new(cfg.client);
            print_json(&json!({
                "configured": client.is_configured(),
                "webhookBaseUrl": client.config().base_url(),
            }))
        }

        Command::Demo { name, email } => {
            let response = run_demo(&cfg, &name, &email).await?;
            print_json(&response)?;

            if !response.success {
                bail!("Demo workflow trigger failed");
            }
            Ok(())
        }
    }
}

/* ---------------- config ---------------- */

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut cfg = match explicit {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG))?,
    };

    cfg.apply_env()?;
    Ok(cfg)
}

fn apply_target(client: &mut ClientConfig, target: TargetArgs) {
    if let Some(url) = target.base_url {
        client.webhook_base_url = Some(url);
    }
    if let Some(ms) = target.timeout_ms {
        client.timeout_ms = Some(ms);
    }
}

/* ---------------- demo ---------------- */

/// Serve the mock on an ephemeral port, trigger it once, shut it down.
async fn run_demo(cfg: &Config, name: &str, email: &str) -> Result<WorkflowResponse> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind demo listener")?;
    let addr = listener.local_addr()?;

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(mock::serve_on(
        listener,
        MockState::new(cfg.server.delay()),
        async move {
            let _ = stop_rx.await;
        },
    ));

    let mut client_cfg = cfg.client.clone();
    client_cfg.webhook_base_url = Some(format!("http://{}{}", addr, MOCK_BASE_PATH));

    let client = WorkflowClient::new(client_cfg);
    let response = client
        .trigger(
            MOCK_WORKFLOW_ID,
            json!({
                "email": email,
                "name": name,
                "action": "test_workflow",
                "timestamp": iso_now(),
            }),
        )
        .await;

    let _ = stop_tx.send(());
    server.await.context("Demo server task failed")??;

    Ok(response)
}

/* ---------------- output ---------------- */

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn count_failed(responses: &[WorkflowResponse]) -> usize {
    responses.iter().filter(|r| !r.success).count()
}
