use clap::{Parser, Subcommand};

use crate::storage::file::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Searchable phonebook")]
pub struct Cli {
    /// File holding the local key-value storage
    #[arg(long, env = "LOCAL_STORAGE_PATH", default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: String,

    /// URL of a JSON contact list used when nothing is stored locally
    #[arg(long, env = "REMOTE_CONTACTS_URL")]
    pub remote_url: Option<String>,

    /// Whether new contacts need an email (required, optional)
    #[arg(long, env = "EMAIL_POLICY", default_value_t = String::from("required"))]
    pub email_policy: String,

    /// Keep everything in memory for this run only
    #[arg(long)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts matching an optional search
    List {
        /// Text to look for in names and phone numbers
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a single contact of the search results
    Show {
        /// Text to look for in names and phone numbers
        #[arg(short, long)]
        query: Option<String>,

        /// Result to show, starting at 1. Past the end shows the last one
        #[arg(short, long)]
        page: Option<usize>,
    },
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Browse contacts one at a time
    Browse {
        /// Initial search text
        #[arg(short, long)]
        query: Option<String>,
    },
}
