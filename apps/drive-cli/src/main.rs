mod adapters;
mod cli;
mod config;
mod render;

use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crdrive_client::{Client, ClientOptions};
use crdrive_explorer::DropArea;
use crdrive_protocol::PageContext;
use crdrive_share::{DialogState, MutationOutcome, ShareManager};
use crdrive_transfer::FileSelection;
use crdrive_upload::UploadOrchestrator;

use adapters::DriveAdapter;
use cli::{Cli, Command, ConfigCommand, ShareCommand};
use config::DriveConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,crdrive=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = apply_overrides(DriveConfig::load().unwrap_or_default(), &cli);

    match cli.command {
        Command::Upload { page_url, files } => upload(&cfg, page_url, files).await,
        Command::Share { action } => share(&cfg, action).await,
        Command::Config { action } => config_command(&cfg, action),
    }
}

fn apply_overrides(mut cfg: DriveConfig, cli: &Cli) -> DriveConfig {
    if let Some(url) = &cli.base_url {
        cfg.base_url = url.clone();
    }
    if let Some(token) = &cli.csrf_token {
        cfg.csrf_token = token.clone();
    }
    if let Some(cookie) = &cli.cookie {
        cfg.session_cookie = Some(cookie.clone());
    }
    cfg
}

fn connect(cfg: &DriveConfig) -> anyhow::Result<Arc<Client>> {
    let client = Client::new(ClientOptions {
        base_url: cfg.base_url.clone(),
        csrf_token: cfg.csrf_token.clone(),
        session_cookie: cfg.session_cookie.clone(),
        timeout: cfg.request_timeout(),
        chunk_size: None,
    })
    .context("failed to build HTTP client")?;
    Ok(Arc::new(client))
}

async fn upload(
    cfg: &DriveConfig,
    page_url: String,
    files: Vec<std::path::PathBuf>,
) -> anyhow::Result<ExitCode> {
    let selection = FileSelection::from_paths(&files).context("invalid file selection")?;
    let mut area = DropArea::default();
    area.pick(selection);
    for line in area.selected_lines() {
        println!("  {line}");
    }

    let client = connect(cfg)?;
    let adapter = DriveAdapter::new(client.clone());
    let mut orchestrator =
        UploadOrchestrator::new(PageContext::new(page_url.clone(), cfg.csrf_token.clone()))
            .with_reload_delay(cfg.reload_delay());

    let mut events = orchestrator
        .take_events()
        .context("upload events already taken")?;
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            if let Some(line) = render::upload_event(&event) {
                println!("{line}");
            }
        }
    });

    let outcome = orchestrator.submit(&adapter, area.selection()).await;
    // Closes the event channel so the printer drains and exits.
    drop(orchestrator);
    let _ = printer.await;

    let Some(delay) = outcome.reload_after else {
        return Ok(ExitCode::FAILURE);
    };
    tokio::time::sleep(delay).await;
    match client.fetch_page(&page_url).await {
        Ok(body) => tracing::debug!(bytes = body.len(), "page reloaded"),
        Err(e) => tracing::warn!(error = %e, "page reload failed"),
    }
    Ok(ExitCode::SUCCESS)
}

async fn share(cfg: &DriveConfig, action: ShareCommand) -> anyhow::Result<ExitCode> {
    let client = connect(cfg)?;
    let mut mgr = ShareManager::new(Arc::new(DriveAdapter::new(client)));

    let entity = match &action {
        ShareCommand::Show { entity }
        | ShareCommand::Visibility { entity, .. }
        | ShareCommand::Add { entity, .. }
        | ShareCommand::Remove { entity, .. } => *entity,
    };
    let target = entity.target();
    let title = target.to_string();

    if mgr.open(target, &title).await.is_err() {
        print!("{}", render::share_dialog(mgr.state(), mgr.dialog()));
        return Ok(ExitCode::FAILURE);
    }

    let outcome = match action {
        ShareCommand::Show { .. } => MutationOutcome::Applied,
        ShareCommand::Visibility { visibility, .. } => mgr.change_visibility(visibility).await,
        ShareCommand::Add {
            username, access, ..
        } => mgr.add_user(&username, access).await,
        ShareCommand::Remove { username, yes, .. } => {
            if yes {
                mgr.remove_user(&username, &|_: &str| true).await
            } else {
                mgr.remove_user(&username, &stdin_confirm).await
            }
        }
    };

    print!("{}", render::share_dialog(mgr.state(), mgr.dialog()));
    match outcome {
        MutationOutcome::Applied if mgr.state() != DialogState::Error => Ok(ExitCode::SUCCESS),
        MutationOutcome::Ignored => {
            if !mgr.dialog().is_owner {
                eprintln!("only the owner can change sharing settings");
            }
            Ok(ExitCode::FAILURE)
        }
        _ => Ok(ExitCode::FAILURE),
    }
}

fn stdin_confirm(message: &str) -> bool {
    print!("{message} [y/N] ");
    let _ = std::io::stdout().flush();
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn config_command(cfg: &DriveConfig, action: ConfigCommand) -> anyhow::Result<ExitCode> {
    match action {
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(cfg)?);
        }
        ConfigCommand::Save => {
            let path = cfg.save()?;
            println!("saved {}", path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}
