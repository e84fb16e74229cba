use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ClientConfig, DEFAULT_BASE_URL};

/// Smart Diet: search a food-nutrition service, log what you eat, export the log.
#[derive(Parser, Debug)]
#[command(name = "smart-diet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the food-search service.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory CSV exports are written to.
    #[arg(long, global = true, default_value = ".")]
    pub out_dir: PathBuf,

    /// Log request details (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session: search with suggestions, sort, log foods, export CSV.
    Interactive,

    /// Run one search and print the result table.
    Search {
        /// Food name or part of it.
        query: String,

        /// Column to sort by: name, calories, protein, carbs or fat.
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending.
        #[arg(long, requires = "sort")]
        desc: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

impl Cli {
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url, self.out_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["smart-diet"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert_eq!(
            cli.config().search_url(),
            "http://127.0.0.1:8000/food/search"
        );
    }

    #[test]
    fn test_search_subcommand() {
        let cli = Cli::parse_from([
            "smart-diet",
            "search",
            "apple",
            "--sort",
            "calories",
            "--desc",
            "--base-url",
            "http://food.local/",
        ]);

        match cli.command {
            Some(Command::Search { ref query, ref sort, desc }) => {
                assert_eq!(query, "apple");
                assert_eq!(sort.as_deref(), Some("calories"));
                assert!(desc);
            }
            _ => panic!("expected search command"),
        }
        assert_eq!(cli.config().base_url, "http://food.local");
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["smart-diet", "search", "apple", "--desc"]).is_err());
    }
}
