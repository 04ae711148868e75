//! CLI surface for the tm2snip binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::config::ConvertConfig;
use crate::pipeline;

/// Convert TextMate snippets to Vim's snipMate format.
#[derive(Parser, Debug)]
#[command(
    name = "tm2snip",
    version,
    about = "Convert TextMate .tmSnippet files to snipMate .snippets files"
)]
pub struct Cli {
    /// Directory containing .tmSnippet files (non-recursive)
    pub source_dir: Option<PathBuf>,

    /// Existing directory to write .snippets files into
    pub target_dir: Option<PathBuf>,

    /// Namespace domain suffix appended to every output file stem
    #[arg(long)]
    pub domain: Option<String>,

    /// Print the final run summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Too few positionals: print usage to stdout and exit clean, matching
    // the original tool's behavior.
    let (source, target) = match (cli.source_dir, cli.target_dir) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let mut cfg = ConvertConfig::from_env();
    if let Some(domain) = cli.domain {
        cfg = cfg.with_domain(domain);
    }

    let invocation = std::env::args()
        .next()
        .unwrap_or_else(|| "tm2snip".to_string());

    let report = pipeline::run(&source, &target, &cfg, &invocation)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
