//! Command line front end.

use crate::config::Config;
use crate::error::{Result, SearchError};
use crate::search::Category;
use crate::{format, input};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "declgrep")]
#[command(about = "Fuzzy search over extracted C and C++ declarations", long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["functions", "typedefs", "structs", "classes", "kind", "print"])
))]
pub struct Cli {
    /// JSON file of declarations extracted from one source file
    pub decls: PathBuf,

    /// The query to search for. Without one, everything is printed
    pub query: Option<String>,

    /// Search for functions
    #[arg(short = 'f', long)]
    pub functions: bool,
    /// Search for typedefs
    #[arg(short = 't', long)]
    pub typedefs: bool,
    /// Search for structs
    #[arg(short = 's', long)]
    pub structs: bool,
    /// Search for classes
    #[arg(short = 'c', long)]
    pub classes: bool,
    /// Search a category given by name
    #[arg(short = 'k', long)]
    pub kind: Option<Category>,
    /// Don't query, just print everything
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Print only the single best match
    #[arg(short = 'b', long)]
    pub best: bool,
    /// Number of matches to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
    /// Show the edit distance next to each match
    #[arg(long)]
    pub scores: bool,
    /// Emit results as JSON
    #[arg(long)]
    pub json: bool,
    /// Config file (defaults to <config dir>/declgrep/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// What one invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Print,
    Search(Category),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        let selected = [
            (self.functions, Category::Functions),
            (self.typedefs, Category::Typedefs),
            (self.structs, Category::Structs),
            (self.classes, Category::Classes),
        ]
        .into_iter()
        .find_map(|(flag, category)| flag.then_some(category))
        .or(self.kind);

        match (selected, &self.query) {
            (Some(category), Some(_)) if !self.print => Mode::Search(category),
            _ => Mode::Print,
        }
    }

    /// Config file values with command line flags layered on top.
    pub fn settings(&self) -> Result<Config> {
        let mut config = Config::discover(self.config.as_deref())?;
        config.best_match |= self.best;
        config.show_scores |= self.scores;
        if let Some(limit) = self.limit {
            // Best-match mode prints one result and ignores the limit.
            if limit == 0 && !config.best_match {
                return Err(SearchError::InvalidLimit.into());
            }
            config.limit = limit.max(1);
        }
        Ok(config)
    }
}

/// Runs one invocation and returns what should be printed on stdout.
pub fn run(cli: &Cli) -> Result<String> {
    let settings = cli.settings()?;
    let aggregate = input::load_aggregate(&cli.decls)?;

    let (category, query) = match (cli.mode(), cli.query.as_deref()) {
        (Mode::Search(category), Some(query)) => (category, query),
        _ => return Ok(format::listing(&aggregate)),
    };

    tracing::info!("Searching {} for {:?}", category, query);

    if settings.best_match {
        let best = aggregate.best_match(category, query)?;
        return Ok(if cli.json {
            format!("{}\n", serde_json::to_string_pretty(&best)?)
        } else {
            format::single(&best, settings.show_scores)
        });
    }

    let scores = aggregate.rank(category, query, settings.limit)?;
    Ok(if cli.json {
        format!("{}\n", serde_json::to_string_pretty(&scores)?)
    } else {
        format::matches(&scores, settings.show_scores)
    })
}
