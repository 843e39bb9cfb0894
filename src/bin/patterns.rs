use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pattern_catalog::catalog::{self, Category, PatternEntry};
use pattern_catalog::config::{CatalogConfig, DEFAULT_CONFIG_FILE};
use pattern_catalog::{docs, logging, verify};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "patterns", version, about = "Browse, run and document the design patterns catalog")]
struct Cli {
    /// Config file; a missing file means defaults
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the patterns in index order
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Run a pattern's demo and print its output
    Run { pattern: String },
    /// Print a pattern's documentation page
    Show { pattern: String },
    /// Check that demos print their documented output
    Verify { patterns: Vec<String> },
    /// Write the index and pattern pages
    Docs {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compare a docs directory with the current catalog
    Audit {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the command succeeded; `verify` and `audit` report failures this way.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = CatalogConfig::load(&cli.config)?;
    if cli.no_color {
        config.color = false;
    }
    colored::control::set_override(config.color);
    tracing::debug!("Effective config: {:?}", config);

    match cli.command {
        Command::List { category, json } => list(category.as_deref(), json)?,
        Command::Run { pattern } => {
            let entry = catalog::find(&pattern)?;
            print!("{}", entry.run());
        }
        Command::Show { pattern } => {
            let entry = catalog::find(&pattern)?;
            print!("{}", docs::render_page(entry));
        }
        Command::Verify { patterns } => return verify_patterns(&patterns),
        Command::Docs { out } => {
            let root = out.unwrap_or_else(|| config.docs_dir.clone());
            let summary = docs::write_site(catalog::entries(), &config, &root)
                .with_context(|| format!("writing docs to {}", root.display()))?;
            println!("Wrote {} pages to {}", summary.pages(), root.display());
        }
        Command::Audit { dir } => {
            let root = dir.unwrap_or_else(|| config.docs_dir.clone());
            return audit(&config, &root);
        }
    }
    Ok(true)
}

fn list(category: Option<&str>, json: bool) -> anyhow::Result<()> {
    let filter = match category {
        Some(name) => match Category::parse(name) {
            Some(category) => Some(category),
            None => bail!("Unknown category '{name}' (expected creational, structural or behavioral)"),
        },
        None => None,
    };

    let entries: Vec<&PatternEntry> = catalog::entries()
        .iter()
        .filter(|entry| filter.map_or(true, |c| entry.category == c))
        .collect();

    if json {
        println!("{}", catalog::to_json(&entries)?);
        return Ok(());
    }

    let width = entries.iter().map(|entry| entry.slug.len()).max().unwrap_or(0);
    for entry in entries {
        println!(
            "{}  {:<10}  {}",
            format!("{:<width$}", entry.slug).bold(),
            entry.category.to_string(),
            entry.summary.dimmed()
        );
    }
    Ok(())
}

fn verify_patterns(names: &[String]) -> anyhow::Result<bool> {
    let entries: Vec<&PatternEntry> = if names.is_empty() {
        catalog::entries().iter().collect()
    } else {
        names
            .iter()
            .map(|name| catalog::find(name))
            .collect::<Result<_, _>>()?
    };

    let report = verify::verify_all(&entries);
    for outcome in &report.outcomes {
        match &outcome.mismatch {
            None => println!("{} {}", "PASS".green().bold(), outcome.slug),
            Some(mismatch) => {
                println!("{} {}", "FAIL".red().bold(), outcome.slug);
                println!("     line {}", mismatch.line + 1);
                println!("     expected: {}", mismatch.expected);
                println!("     actual:   {}", mismatch.actual);
            }
        }
    }

    let summary = report.summary();
    if report.passed() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.red());
    }
    Ok(report.passed())
}

fn audit(config: &CatalogConfig, root: &std::path::Path) -> anyhow::Result<bool> {
    let report = docs::audit_site(catalog::entries(), config, root)?;

    if !report.index_current {
        println!("{} {}", "index".yellow(), docs::INDEX_FILE);
    }
    for slug in &report.missing {
        println!("{} {}", "missing".red(), slug);
    }
    for slug in &report.stale {
        println!("{} {}", "stale".yellow(), slug);
    }
    for slug in &report.without_rust {
        println!("{} {}", "no rust block".yellow(), slug);
    }
    for path in &report.orphans {
        println!("{} {}", "orphan".yellow(), path.display());
    }

    if report.is_clean() {
        println!("{} {} is up to date", "OK".green().bold(), root.display());
    }
    Ok(report.is_clean())
}
