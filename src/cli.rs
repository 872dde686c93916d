use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::errors::WarError;
use crate::rating::{GenderFilter, Method};

#[derive(Parser, Debug)]
#[command(name = "war-ranking", author, version, about = "weighted average rating ranking")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the top players by weighted average rating
    Rank {
        /// Averaging method key ("war" or "simple", defaults to "war")
        #[arg(short, long, value_parser = parse_method)]
        method: Option<Method>,
        /// Gender filter key ("" for everyone, "F" for women only)
        #[arg(short, long, value_parser = parse_gender)]
        gender: Option<GenderFilter>,
        /// Maximum number of players (defaults to 50)
        #[arg(long)]
        maximum: Option<usize>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the rating lists used for the ranking window
    Lists {
        #[arg(short, long, value_parser = parse_method)]
        method: Option<Method>,
        #[arg(short, long, value_parser = parse_gender)]
        gender: Option<GenderFilter>,
        #[arg(long)]
        json: bool,
    },
    /// Show the selectable methods and gender filters
    Menus {
        #[arg(long)]
        json: bool,
    },
    /// Recreate the database schema
    Setup,
    /// Load rating lists from a JSON dataset
    Import {
        /// Dataset file
        path: PathBuf,
        /// Recreate the schema before loading
        #[arg(long)]
        reset: bool,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

/// Method keys as listed by the methods menu
fn parse_method(key: &str) -> Result<Method, Infallible> {
    Ok(Method::from_key(Some(key)))
}

/// Gender keys as listed by the gender menu
fn parse_gender(key: &str) -> Result<GenderFilter, WarError> {
    GenderFilter::from_key(key)
}
