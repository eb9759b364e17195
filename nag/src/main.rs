//! Reminds you to run important commands on a regular basis.
//!
//! Entries come from a JSON config (`--config`, or the per-user defaults);
//! last-run times persist in a JSON history file (`--history`, or the
//! per-user cache). The default sweep prompts for each due entry; `--name`
//! runs one entry unconditionally; `--list` reports without running.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use nag::error::NagError;
use nag::exit_codes;
use nag::io::command::ShellRunner;
use nag::io::config::load_entries;
use nag::io::history::HistoryStore;
use nag::io::paths::{Env, default_history_path};
use nag::{list, logging, run_by_name, sweep};

#[derive(Parser)]
#[command(
    name = "nag",
    version,
    about = "Reminds you to run important commands on a regular basis"
)]
struct Cli {
    /// Config file with entries to track (defaults to the per-user locations).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run-history file (defaults to the per-user cache directory).
    #[arg(long)]
    history: Option<PathBuf>,

    /// Run this entry now, without prompting or checking whether it is due.
    #[arg(short, long, conflicts_with = "list")]
    name: Option<String>,

    /// Show each entry's last run and next due date without running anything.
    #[arg(short, long)]
    list: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let env = Env::detect();
    let entries = load_entries(cli.config.as_deref(), &env)?;
    let history = match cli.history {
        Some(path) => HistoryStore::new(path),
        None => HistoryStore::new(default_history_path(&env)?),
    };

    if let Some(name) = cli.name.as_deref() {
        return run_by_name::run_by_name(&entries, &history, &ShellRunner, name);
    }
    if cli.list {
        let mut stdout = std::io::stdout().lock();
        return list::list(&entries, &history, &mut stdout);
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    sweep::sweep(&entries, &history, &ShellRunner, &mut input, &mut output)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<NagError>()
        .map(NagError::exit_code)
        .unwrap_or(exit_codes::INVALID)
}
