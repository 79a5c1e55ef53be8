//! lexarithmos: evaluate, insert, and delete phrases in the word-number registry.
//!
//! Usage:
//!   lexarithmos value "λόγος"
//!   lexarithmos --root ~/notes insert "λόγος"
//!   lexarithmos add "ΛΟΓΟΣ" 373 13 4
//!   lexarithmos show 373

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use lexarithmos_core::config::CliOverrides;
use lexarithmos_core::errors::{parse_key_chain, LexErrorCode, LexarithmosResult, RegistryError};
use lexarithmos_runtime::{Action, Change, IndexSummary, LexarithmosRuntime, RuntimeOptions};
use lexarithmos_storage::{DeleteOutcome, UpsertOutcome};

#[derive(Debug, Parser)]
#[command(name = "lexarithmos")]
#[command(version, about = "Greek isopsephy word-number registry")]
struct Cli {
    /// Project root; the data directory resolves against it
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Data directory holding the registry and index files
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Skip index regeneration after a mutation
    #[arg(long, global = true)]
    no_refresh: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the key chain of a phrase without storing it
    Value { phrase: String },
    /// Store a phrase under its word number
    Insert { phrase: String },
    /// Remove a phrase from its word number
    Delete { phrase: String },
    /// Store a phrase under an explicit key chain
    Add {
        phrase: String,
        #[arg(required = true)]
        numbers: Vec<String>,
    },
    /// Print the record stored under a key
    Show { key: u64 },
    /// Regenerate the permutation and variation indexes
    Refresh,
}

fn main() -> ExitCode {
    lexarithmos_core::tracing::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> LexarithmosResult<()> {
    let overrides = CliOverrides {
        data_dir: cli.data_dir,
        registry_file: None,
        auto_refresh: cli.no_refresh.then_some(false),
    };
    let mut runtime = LexarithmosRuntime::open(RuntimeOptions {
        project_root: cli.root,
        cli_overrides: Some(overrides),
        ..Default::default()
    })?;

    tracing::debug!(command = ?cli.command, "running command");
    match cli.command {
        Command::Value { phrase } => {
            let outcome = runtime.process(&phrase, Action::Evaluate)?;
            println!("{}", format_chain(&outcome.key_chain));
        }
        Command::Insert { phrase } => mutate(&mut runtime, &phrase, Action::Insert)?,
        Command::Delete { phrase } => mutate(&mut runtime, &phrase, Action::Delete)?,
        Command::Add { phrase, numbers } => {
            let key_chain = parse_key_chain(&numbers)?;
            let outcome = runtime.upsert(&phrase, &key_chain)?;
            println!("{}", describe_change(Change::Inserted(outcome), key_chain[0]));
            print_summary(runtime.refresh_if_enabled()?);
        }
        Command::Show { key } => {
            let record = runtime
                .lookup(key)
                .ok_or(RegistryError::UnknownKey { key })?;
            let rendered = serde_json::to_string_pretty(record)
                .unwrap_or_else(|_| format!("{record:?}"));
            println!("{rendered}");
        }
        Command::Refresh => {
            print_summary(Some(runtime.refresh_indexes()?));
        }
    }
    Ok(())
}

fn mutate(runtime: &mut LexarithmosRuntime, phrase: &str, action: Action) -> LexarithmosResult<()> {
    let outcome = runtime.process(phrase, action)?;
    println!("{}", format_chain(&outcome.key_chain));
    if let Some(change) = outcome.change {
        println!("{}", describe_change(change, outcome.key()));
    }
    print_summary(outcome.indexes);
    Ok(())
}

fn format_chain(chain: &[u64]) -> String {
    chain
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

fn describe_change(change: Change, key: u64) -> String {
    match change {
        Change::Inserted(UpsertOutcome::Created) => format!("created record {key}"),
        Change::Inserted(UpsertOutcome::PhraseAdded) => format!("added phrase to {key}"),
        Change::Inserted(UpsertOutcome::AlreadyPresent) => format!("already stored under {key}"),
        Change::Deleted(DeleteOutcome::PhraseRemoved) => format!("removed phrase from {key}"),
        Change::Deleted(DeleteOutcome::RecordRemoved) => format!("removed record {key}"),
    }
}

fn print_summary(summary: Option<IndexSummary>) {
    let Some(summary) = summary else {
        return;
    };
    let count = |groups: Option<usize>| groups.map_or("off".to_string(), |n| n.to_string());
    println!(
        "indexes: {} permutation groups, {} variation groups",
        count(summary.permutation_groups),
        count(summary.variation_groups)
    );
}
