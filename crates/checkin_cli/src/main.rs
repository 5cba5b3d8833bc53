//! Command-line front-end for the daily check-in core.
//!
//! # Responsibility
//! - Resolve the data directory, bootstrap logging and the database.
//! - Map subcommands onto the core's module-scoped save operations.
//!
//! A CLI invocation is one discrete edit, so saves go straight through; the
//! library-level `SaveScheduler` is for embeddings with keystroke-granularity
//! input.

use checkin_core::db::open_db;
use checkin_core::{
    content, default_log_level, init_logging, AppState, CheckinService, MinimalAction,
    SqliteStateStore, SystemClock,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "checkin", version, about = "Personal daily check-in")]
struct Cli {
    /// Directory holding the database and logs. Defaults to
    /// ~/.local/share/checkin.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's check-in and recent history (default).
    Show,
    /// Show only the archived history ledger.
    History,
    /// Edit the "what I control today" list.
    Control {
        #[command(subcommand)]
        command: ControlCommand,
    },
    /// Edit today's relationship notes.
    Relationships(RelationshipsArgs),
    /// Edit today's family notes.
    Family(FamilyArgs),
    /// Edit today's minimal action.
    Action {
        #[command(subcommand)]
        command: ActionCommand,
    },
}

#[derive(Subcommand)]
enum ControlCommand {
    /// Append an entry to the list.
    Add { text: String },
    /// Remove all entries for today.
    Clear,
}

#[derive(Args)]
struct RelationshipsArgs {
    /// What others expect from me today.
    #[arg(long)]
    external_expectation: Option<String>,
    /// What I need to protect today.
    #[arg(long)]
    need_to_protect: Option<String>,
}

#[derive(Args)]
struct FamilyArgs {
    /// What they expect.
    #[arg(long)]
    they_expect: Option<String>,
    /// What I decide.
    #[arg(long)]
    i_decide: Option<String>,
}

#[derive(Subcommand)]
enum ActionCommand {
    /// Set today's single minimal action.
    Set { text: String },
    /// Mark the action completed.
    Done,
    /// Mark the action not completed.
    Undone,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir);
    if let Err(err) = std::fs::create_dir_all(&data_dir) {
        eprintln!("cannot create data directory {}: {err}", data_dir.display());
        return ExitCode::FAILURE;
    }

    // Logging failure degrades to an unlogged session, never a refusal.
    let log_dir = data_dir.join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match open_db(data_dir.join("checkin.db")) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open check-in database: {err}");
            return ExitCode::FAILURE;
        }
    };
    let store = SqliteStateStore::new(&conn);
    let service = CheckinService::new(store, SystemClock);

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => print_state(&service.get_current()),
        Command::History => print_history(&service.get_current()),
        Command::Control { command } => {
            let mut items = service.get_current().current.control.items;
            match command {
                ControlCommand::Add { text } => items.push(text),
                ControlCommand::Clear => items.clear(),
            }
            print_state(&service.save_control(items));
        }
        Command::Relationships(args) => {
            let mut relationships = service.get_current().current.relationships;
            if let Some(value) = args.external_expectation {
                relationships.external_expectation = value;
            }
            if let Some(value) = args.need_to_protect {
                relationships.need_to_protect = value;
            }
            print_state(&service.save_relationships(relationships));
        }
        Command::Family(args) => {
            let mut family = service.get_current().current.family;
            if let Some(value) = args.they_expect {
                family.they_expect = value;
            }
            if let Some(value) = args.i_decide {
                family.i_decide = value;
            }
            print_state(&service.save_family(family));
        }
        Command::Action { command } => {
            let mut minimal_action = service.get_current().current.minimal_action;
            match command {
                ActionCommand::Set { text } => minimal_action.action = text,
                ActionCommand::Done => minimal_action.completed = true,
                ActionCommand::Undone => minimal_action.completed = false,
            }
            print_state(&service.save_minimal_action(minimal_action));
        }
    }

    ExitCode::SUCCESS
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".local/share/checkin"),
        None => PathBuf::from("."),
    }
}

fn print_state(state: &AppState) {
    let day = &state.current;
    println!("== {} ==", day.date);
    println!("{}", content::daily_anchor_phrase(&day.date));
    println!();

    println!("what I control today:");
    if day.control.items.is_empty() {
        println!("  (nothing yet)");
    }
    for (index, item) in day.control.items.iter().enumerate() {
        println!("  {}. {item}", index + 1);
    }

    println!("relationships:");
    print_note("they expect", &day.relationships.external_expectation);
    print_note("I protect", &day.relationships.need_to_protect);

    println!("family:");
    print_note("they expect", &day.family.they_expect);
    print_note("I decide", &day.family.i_decide);

    print_minimal_action(&day.minimal_action);
    print_history(state);
}

fn print_minimal_action(minimal_action: &MinimalAction) {
    let mark = if minimal_action.completed { "x" } else { " " };
    if minimal_action.action.trim().is_empty() {
        println!("minimal action: (not chosen)");
    } else {
        println!("minimal action: [{mark}] {}", minimal_action.action);
    }
}

fn print_note(label: &str, value: &str) {
    if value.trim().is_empty() {
        println!("  {label}: -");
    } else {
        println!("  {label}: {value}");
    }
}

fn print_history(state: &AppState) {
    println!();
    if state.history.is_empty() {
        println!("history: (empty)");
        return;
    }
    println!("history (most recent first):");
    for entry in &state.history {
        let mark = if entry.minimal_action.completed {
            "x"
        } else {
            " "
        };
        println!(
            "  {} | {} item(s) | [{mark}] {}",
            entry.date,
            entry.control.len(),
            if entry.minimal_action.action.is_empty() {
                "-"
            } else {
                entry.minimal_action.action.as_str()
            }
        );
    }
}
