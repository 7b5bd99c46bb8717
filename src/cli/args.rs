// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Notes service base URL, overrides the config file
    #[arg(short = 'u', long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the notes page and open it in the browser
    Show {
        /// Write the page to this file instead of opening a browser
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print active notes, or archived ones with --archived
    List {
        /// List archived notes
        #[arg(long)]
        archived: bool,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note through the creation form
    Add {
        /// Note title
        #[arg(short, long)]
        title: String,

        /// Note body
        #[arg(short, long)]
        body: String,
    },

    /// Archive an active note
    Archive {
        /// Note ID to archive
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Move an archived note back to the active list
    Unarchive {
        /// Note ID to unarchive
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Delete from the archive list instead of the active list
        #[arg(long)]
        archived: bool,
    },
}
