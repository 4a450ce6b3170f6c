use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::{ListJson, StatsJson, print_tasks, task_to_json};
use crate::io::config_io::read_config;
use crate::io::kv::{KvStore, default_data_dir};
use crate::model::filter::{Filter, SortKey};
use crate::ops::select::select_tasks;
use crate::ops::sort::sort_tasks;
use crate::store::TaskStore;
use crate::util::dates::parse_due;

/// Error type for rejected CLI commands. The store itself stays silent on
/// rejected mutations; the CLI surfaces them so scripts get an exit code.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("no task with id {0}")]
    NotFound(u64),
    #[error("title is empty")]
    EmptyTitle,
    #[error("invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let json = cli.json;

    match cli.command {
        // No subcommand → launch TUI
        None => crate::tui::run(&data_dir),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(args, data_dir, json),
            Commands::List(args) => cmd_list(args, data_dir, json),
            Commands::Done(args) => cmd_done(args, data_dir),
            Commands::Title(args) => cmd_title(args, data_dir),
            Commands::Rm(args) => cmd_rm(args, data_dir),
            Commands::Stats => cmd_stats(data_dir, json),
        },
    }
}

/// Resolve the data directory: -C override, or the XDG default.
pub fn resolve_data_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir {
        Some(dir) => PathBuf::from(dir),
        None => default_data_dir(),
    }
}

fn open_store(data_dir: &Path) -> TaskStore {
    TaskStore::open(KvStore::open(data_dir.to_path_buf()))
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, data_dir: PathBuf, json: bool) -> CmdResult {
    let due = match args.due.as_deref() {
        Some(input) => Some(
            parse_due(input).ok_or_else(|| CommandError::InvalidDate(input.to_string()))?,
        ),
        None => None,
    };

    let mut store = open_store(&data_dir);
    match store.add_task(&args.title, due) {
        Some(id) => {
            if json {
                let task = store.task(id).ok_or("added task vanished")?;
                println!("{}", serde_json::to_string_pretty(&task_to_json(task))?);
            } else {
                println!("added {}", id);
            }
            Ok(())
        }
        None => Err(CommandError::EmptyTitle.into()),
    }
}

fn cmd_done(args: DoneArgs, data_dir: PathBuf) -> CmdResult {
    let mut store = open_store(&data_dir);
    if !store.toggle_completed(args.id) {
        return Err(CommandError::NotFound(args.id).into());
    }
    let task = store.task(args.id).ok_or("toggled task vanished")?;
    let state = if task.completed { "done" } else { "pending" };
    println!("{} is {}", args.id, state);
    Ok(())
}

fn cmd_title(args: TitleArgs, data_dir: PathBuf) -> CmdResult {
    let mut store = open_store(&data_dir);
    if !store.update_task(args.id, &args.title) {
        if store.task(args.id).is_none() {
            return Err(CommandError::NotFound(args.id).into());
        }
        return Err(CommandError::EmptyTitle.into());
    }
    println!("retitled {}", args.id);
    Ok(())
}

fn cmd_rm(args: RmArgs, data_dir: PathBuf) -> CmdResult {
    let mut store = open_store(&data_dir);
    if !store.delete_task(args.id) {
        return Err(CommandError::NotFound(args.id).into());
    }
    println!("deleted {}", args.id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, data_dir: PathBuf, json: bool) -> CmdResult {
    let config = read_config(&data_dir);
    let filter: Filter = match args.filter.as_deref() {
        Some(s) => s.parse()?,
        None => config.default_filter(),
    };
    let sort: SortKey = match args.sort.as_deref() {
        Some(s) => s.parse()?,
        None => config.default_sort(),
    };

    let store = open_store(&data_dir);
    let selected = if args.overdue {
        store.overdue_tasks()
    } else {
        select_tasks(store.all_tasks(), filter)
    };
    let displayed = sort_tasks(&selected, sort);

    if json {
        let out = ListJson {
            filter: filter.to_string(),
            sort: sort.to_string(),
            remaining: store.remaining(),
            total: store.total(),
            tasks: displayed.iter().map(task_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_tasks(&displayed);
        println!("{} of {} remaining", store.remaining(), store.total());
    }
    Ok(())
}

fn cmd_stats(data_dir: PathBuf, json: bool) -> CmdResult {
    let store = open_store(&data_dir);
    let stats = StatsJson {
        total: store.total(),
        remaining: store.remaining(),
        completed: store.completed_tasks().len(),
        overdue: store.overdue_tasks().len(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "{} tasks: {} remaining, {} completed, {} overdue",
            stats.total, stats.remaining, stats.completed, stats.overdue
        );
    }
    Ok(())
}
