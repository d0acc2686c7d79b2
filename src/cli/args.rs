// src/cli/args.rs
use crate::domain::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Notes server URL (overrides the config file)
    #[arg(short, long, value_name = "URL", global = true)]
    pub server: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Language of messages and dates: ru or en
    #[arg(short, long, value_name = "LOCALE", global = true)]
    pub locale: Option<Locale>,

    /// Show the result as a page in the browser instead of the terminal
    #[arg(long, global = true)]
    pub html: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all notes
    List,

    /// Show one note in full
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Add a note
    Add {
        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "CONTENT", default_value = "")]
        content: String,
    },

    /// Change the title and/or content of a note
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// New title (unchanged if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New content (unchanged if omitted)
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// End the server session in the browser
    Logout,
}
