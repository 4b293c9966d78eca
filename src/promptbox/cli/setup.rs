use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "promptbox", bin_name = "promptbox", version)]
#[command(
    about = "Prompt scratchpad with a self-naming history",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new, empty entry
    #[command(alias = "n")]
    New,

    /// Set the active entry's content (reads stdin when no text is given)
    #[command(alias = "w")]
    Write {
        /// Content words, joined with spaces
        text: Vec<String>,
    },

    /// Make an entry the active one
    #[command(alias = "s")]
    Select {
        /// Index of the entry (e.g. 2)
        index: String,
    },

    /// Rename an entry; the name must end with .txt
    #[command(alias = "mv")]
    Rename {
        /// Index of the entry (e.g. 1)
        index: String,

        /// New file name, joined with spaces
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Index of the entry (e.g. 1)
        index: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every entry
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List the history, most recent first
    #[command(alias = "ls")]
    List,

    /// Print the active content
    Show,

    /// Edit the active content in $EDITOR
    #[command(alias = "e")]
    Edit,

    /// Copy the active content to the clipboard
    #[command(alias = "cp")]
    Copy,

    /// Toggle word wrap
    Wrap,

    /// Switch to the next theme
    Theme,

    /// Grow or shrink the font size (e.g. 2 or -1)
    Font {
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. locale)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
