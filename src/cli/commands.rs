// nct: CLI Command Handlers
//
// Each function handles one CLI subcommand. Read-only commands print the
// daemon's data; `edit` and `update-expiring` drive the workflow and map
// its outcomes to messages and exit codes.

use std::process::ExitCode;

use clap::CommandFactory;

use crate::config::RpcConfig;
use crate::error::{NctError, Result};
use crate::gateway::{Gateway, HttpGateway};
use crate::names::NameClient;
use crate::unlock::{Unlocker, system_prompt};
use crate::workflow::{
    BatchEvent, BatchUpdater, EditOutcome, ExternalEditor, Reconciler, Terminal, classify,
    stale_names,
};

use super::{Cli, Commands};

/// Execute the parsed CLI command.
pub async fn execute(cli: Cli) -> Result<ExitCode> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config_path = cli.conf.unwrap_or_else(RpcConfig::default_path);
    let config = RpcConfig::load(&config_path)?;
    tracing::debug!(?config, "RPC configuration");
    let gateway = HttpGateway::new(&config)?;

    match command {
        Commands::List => cmd_list(&gateway).await,
        Commands::Info { name } => cmd_info(&gateway, name).await,
        Commands::Cat { name } => cmd_cat(&gateway, name).await,
        Commands::Edit { name } => cmd_edit(&gateway, name, cli.unlock_time).await,
        Commands::UpdateExpiring { threshold } => {
            cmd_update_expiring(&gateway, threshold, cli.unlock_time).await
        }
    }
}

// ─── Read-only ───────────────────────────────────────────────────────────────

async fn cmd_list<G: Gateway>(gateway: &G) -> Result<ExitCode> {
    let names = NameClient::new(gateway);
    for record in names.list().await? {
        println!("{}", record);
    }
    Ok(ExitCode::SUCCESS)
}

async fn cmd_info<G: Gateway>(gateway: &G, name: Option<String>) -> Result<ExitCode> {
    let Some(name) = name else {
        return Ok(usage("info"));
    };

    let names = NameClient::new(gateway);
    match names.show_raw(&name).await {
        Ok(info) => {
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(NctError::NameNotFound(_)) => Ok(not_found(&name)),
        Err(e) => Err(e),
    }
}

async fn cmd_cat<G: Gateway>(gateway: &G, name: Option<String>) -> Result<ExitCode> {
    let Some(name) = name else {
        return Ok(usage("cat"));
    };

    let names = NameClient::new(gateway);
    match names.show(&name).await {
        Ok(record) => {
            println!("{}", classify(&record.value).normalized);
            Ok(ExitCode::SUCCESS)
        }
        Err(NctError::NameNotFound(_)) => Ok(not_found(&name)),
        Err(e) => Err(e),
    }
}

// ─── Edit ────────────────────────────────────────────────────────────────────

async fn cmd_edit<G: Gateway>(gateway: &G, name: Option<String>, unlock_time: u64) -> Result<ExitCode> {
    let Some(name) = name else {
        return Ok(usage("edit"));
    };

    let names = NameClient::new(gateway);
    let record = match names.show(&name).await {
        Ok(record) => record,
        Err(NctError::NameNotFound(_)) => return Ok(not_found(&name)),
        Err(e) => return Err(e),
    };

    let mut unlocker = Unlocker::new(system_prompt(), unlock_time);
    let mut console = Terminal;
    let editor = ExternalEditor::from_env();

    let outcome = Reconciler::new(names, &mut unlocker, &mut console)
        .run(&record, &editor)
        .await?;

    match outcome {
        EditOutcome::Submitted(txid) => {
            println!("TX: {}", txid);
            Ok(ExitCode::SUCCESS)
        }
        EditOutcome::Cancelled => {
            println!("Update canceled");
            Ok(ExitCode::FAILURE)
        }
        EditOutcome::PassphraseCancelled => {
            println!("Passphrase entry canceled");
            Ok(ExitCode::FAILURE)
        }
        EditOutcome::EditorAborted => {
            println!("Aborting because of non-zero exit status");
            Ok(ExitCode::FAILURE)
        }
    }
}

// ─── Update Expiring ─────────────────────────────────────────────────────────

async fn cmd_update_expiring<G: Gateway>(gateway: &G, threshold: i64, unlock_time: u64) -> Result<ExitCode> {
    let names = NameClient::new(gateway);
    let items = stale_names(names.list().await?, threshold);

    if items.is_empty() {
        println!("All names are up to date");
        return Ok(ExitCode::SUCCESS);
    }
    println!("Updating {} names", items.len());

    let mut unlocker = Unlocker::new(system_prompt(), unlock_time);
    let mut batch = BatchUpdater::new(names, &mut unlocker, items);

    while let Some(event) = batch.next().await? {
        match event {
            BatchEvent::Updated { name, txid } => println!("{}: {}", name, txid),
            BatchEvent::Failed { name, error } => println!("{}: {}", name, error),
            BatchEvent::PassphraseCancelled => println!("Passphrase entry canceled"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn usage(command: &str) -> ExitCode {
    eprintln!("Usage: nct {} <name>", command);
    ExitCode::FAILURE
}

fn not_found(name: &str) -> ExitCode {
    eprintln!("{}", NctError::NameNotFound(name.to_string()));
    ExitCode::FAILURE
}
