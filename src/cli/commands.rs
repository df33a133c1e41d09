use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tk", about = concat!("[/] tick v", env!("CARGO_PKG_VERSION"), " - four buckets, one list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory (default: ~/.tick)
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the end of the list
    Add(AddArgs),
    /// List tasks in display order
    List,
    /// Flip a task's completed flag
    Toggle(ToggleArgs),
    /// Delete a task
    Rm(RmArgs),
    /// Move a task to a new position
    Mv(MvArgs),
    /// Show completion statistics
    Stats,
    /// Show or set the display mode
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Category (work, personal, urgent, other)
    #[arg(long, default_value = "work")]
    pub category: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task ID
    pub id: i64,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task ID
    pub id: i64,
}

#[derive(Args)]
pub struct MvArgs {
    /// Current position (1-based, as shown by `tk list`)
    pub from: usize,
    /// Target position (1-based)
    pub to: usize,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// dark, light, or toggle (omit to show the current mode)
    pub mode: Option<String>,
}
