//! CLI 模块

pub mod tasks;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tier-todo")]
#[command(version)]
#[command(about = "Terminal front-end for a three-tier todo app")]
pub struct Cli {
    /// API base URL (overrides TODO_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive TUI (default)
    Tui,
    /// Print all tasks
    List,
    /// Create a task
    Add {
        /// Task title (words are joined with spaces)
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Flip a task between done and not done
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the Frontend / Backend / Database status
    Health,
}

impl Commands {
    /// 是否进入全屏界面（接管终端）
    pub fn uses_terminal(&self) -> bool {
        matches!(self, Commands::Tui)
    }
}
