use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[*] todos v", env!("CARGO_PKG_VERSION"), " - your to-do list in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Toggle a task between done and pending
    Done(DoneArgs),
    /// Change a task title
    Title(TitleArgs),
    /// Delete a task
    Rm(RmArgs),
    /// Show task counts
    Stats,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct TitleArgs {
    /// Task id
    pub id: u64,
    /// New title
    pub title: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task id
    pub id: u64,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Show only this subset (all, active, completed)
    #[arg(long)]
    pub filter: Option<String>,
    /// Sort order (due, created, title)
    #[arg(long)]
    pub sort: Option<String>,
    /// Show only overdue tasks
    #[arg(long)]
    pub overdue: bool,
}
