use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tix")]
#[command(about = "Terminal renderer for ticket-tracking issues", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Terminal width to lay out against
    #[arg(short, long, global = true)]
    pub width: Option<usize>,

    /// Disable ANSI color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Tracker account name of the viewer (highlights work assigned to you)
    #[arg(long, global = true)]
    pub me: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single issue as a full card
    #[command(alias = "s")]
    Show {
        /// Path to an issue record as JSON, or "-" for stdin
        input: String,
    },

    /// Render issues one per line
    #[command(alias = "ls")]
    List {
        /// Path to a JSON array of issue records, or "-" for stdin
        input: String,
    },

    /// Render an issue with its subtask tree and progress
    #[command(alias = "t")]
    Tree {
        /// Path to an issue record as JSON, or "-" for stdin
        input: String,
    },

    /// Render an issue's comment thread
    #[command(alias = "c")]
    Comments {
        /// Path to a JSON array of comment records, or "-" for stdin
        input: String,
    },
}
