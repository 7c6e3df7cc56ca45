use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "passkeep")]
#[command(about = "Password generator and credential keeper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the credential store file
    #[arg(short, long, global = true, default_value = "data.json")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a password and print its strength
    #[command(alias = "g")]
    Generate {
        /// Password length
        #[arg(short, long, default_value_t = 12)]
        length: usize,

        /// Leave lowercase letters out of the pool
        #[arg(long)]
        no_lower: bool,

        /// Leave uppercase letters out of the pool
        #[arg(long)]
        no_upper: bool,

        /// Leave digits out of the pool
        #[arg(long)]
        no_digits: bool,

        /// Leave symbols out of the pool
        #[arg(long)]
        no_symbols: bool,

        /// Exclude easily-confused characters (Il1O0)
        #[arg(long)]
        exclude_similar: bool,

        /// Exclude ambiguous punctuation (brackets, quotes, ...)
        #[arg(long)]
        exclude_ambiguous: bool,

        /// Save the generated password under this site
        #[arg(long, requires = "email")]
        save: Option<String>,

        /// Email/username to store with the generated password
        #[arg(long, requires = "save")]
        email: Option<String>,
    },

    /// Score the strength of a password
    Score {
        /// The password to score
        password: String,
    },

    /// Save a site/email/password triple (overwrites an existing entry)
    #[command(alias = "s")]
    Save {
        site: String,
        email: String,
        password: String,
    },

    /// Show the credential stored for a site
    Get { site: String },

    /// List stored credentials
    #[command(alias = "ls")]
    List,

    /// Delete the credential stored for a site
    #[command(alias = "rm")]
    Delete { site: String },
}
