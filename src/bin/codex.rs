//! codex: render (and optionally run) SELECT statements from the shell
//!
//! # Usage
//!
//! ```bash
//! # Show the SQL
//! codex select users --project id,email --filter "active = 1" --limit 10
//!
//! # Render for another engine
//! codex select users --engine mysql --offset 20
//!
//! # Run it
//! codex select users --execute --database-url sqlite://app.db
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use codex::prelude::*;
use colored::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codex")]
#[command(version)]
#[command(about = "Build SQL as a tree, render it per dialect", long_about = None)]
#[command(after_help = "EXAMPLES:
    codex select users --project id,email
    codex select orders --filter \"total > 100\" --order created_at --desc --limit 5
    codex select users --engine sqlite --execute --database-url sqlite://app.db")]
struct Cli {
    /// Path to a codex.toml (defaults to ./codex.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a SELECT over one table
    Select(SelectArgs),
    /// List the registered engines
    Engines,
}

#[derive(clap::Args)]
struct SelectArgs {
    /// Table to select from
    table: String,

    /// Columns to project
    #[arg(short, long, value_delimiter = ',')]
    project: Vec<String>,

    /// Raw SQL conditions, ANDed together
    #[arg(short, long)]
    filter: Vec<String>,

    /// Columns to order by
    #[arg(long, value_delimiter = ',')]
    order: Vec<String>,

    /// Sort descending
    #[arg(long)]
    desc: bool,

    #[arg(long)]
    limit: Option<usize>,

    #[arg(long)]
    offset: Option<usize>,

    /// Engine key (overrides the config file)
    #[arg(short, long)]
    engine: Option<String>,

    /// Run the query instead of only printing it
    #[arg(short = 'x', long)]
    execute: bool,

    /// Database connection URL
    #[arg(long, env = "CODEX_DATABASE_URL")]
    database_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "codex=debug" } else { "codex=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Select(args) => run_select(args, &cli).await,
        Commands::Engines => {
            show_engines();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run_select(args: &SelectArgs, cli: &Cli) -> anyhow::Result<()> {
    let mut config = CodexConfig::load(cli.config.as_deref())?;
    if let Some(engine) = &args.engine {
        config.engine = engine.clone();
    }
    if let Some(url) = &args.database_url {
        config.database_url = Some(url.clone());
    }

    let query = build_select(args, &config)?;
    let sql = query.to_sql()?;

    if !args.execute {
        println!("{}", sql.white());
        return Ok(());
    }

    if cli.verbose {
        println!("{} {}", "SQL:".dimmed(), sql.yellow());
    }

    let session = Session::connect_with(&config).await?;
    let results = session.fetch_all(&query).await?;
    format_output(&results, &args.format);

    Ok(())
}

fn build_select(args: &SelectArgs, config: &CodexConfig) -> anyhow::Result<SelectManager> {
    if !VisitorRegistry::shared().contains(&config.engine) {
        anyhow::bail!(
            "unknown engine '{}' (try `codex engines`)",
            config.engine
        );
    }

    let t = table(args.table.as_str());
    let mut query = t.select();
    query.engine(&config.engine);

    query.project(args.project.iter().map(|c| t.attr(c.as_str())));
    for condition in &args.filter {
        query.filter(condition.as_str());
    }
    for column in &args.order {
        let attr = t.attr(column.as_str());
        query.order(if args.desc { attr.desc() } else { attr.asc() });
    }
    if let Some(n) = args.limit {
        query.limit(n);
    }
    if let Some(n) = args.offset {
        query.offset(n);
    }

    Ok(query)
}

fn format_output(results: &[Record], format: &OutputFormat) {
    if results.is_empty() {
        println!("{}", "(no results)".dimmed());
        return;
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results).unwrap_or_default());
        }
        OutputFormat::Table => {
            // Rows are unordered maps; sort the header for a stable layout
            let mut columns: Vec<&String> = results[0].keys().collect();
            columns.sort();

            let mut widths: HashMap<&String, usize> =
                columns.iter().map(|c| (*c, c.len())).collect();
            for row in results {
                for (col, val) in row {
                    let len = val_to_string(val).len();
                    if let Some(w) = widths.get_mut(col) {
                        *w = (*w).max(len);
                    }
                }
            }

            let header: Vec<String> = columns
                .iter()
                .map(|c| format!("{:width$}", c, width = widths[*c]))
                .collect();
            println!("{}", header.join(" │ ").white().bold());

            let sep: Vec<String> = columns.iter().map(|c| "─".repeat(widths[*c])).collect();
            println!("{}", sep.join("─┼─").dimmed());

            for row in results {
                let cells: Vec<String> = columns
                    .iter()
                    .map(|c| {
                        let val = row.get(*c).map(val_to_string).unwrap_or_default();
                        format!("{:width$}", val, width = widths[*c])
                    })
                    .collect();
                println!("{}", cells.join(" │ "));
            }

            println!();
            println!("{} row(s) returned", results.len().to_string().cyan());
        }
    }
}

fn val_to_string(val: &serde_json::Value) -> String {
    match val {
        serde_json::Value::Null => "NULL".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        _ => val.to_string(),
    }
}

fn show_engines() {
    let registry = VisitorRegistry::shared();
    println!("{}", "Registered engines".cyan().bold());
    for key in registry.engines() {
        let marker = if key == codex::transpiler::DEFAULT_ENGINE {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", key.white(), marker);
    }
}
