//! oxide-changeset CLI
//!
//! Command-line tool for rendering upsert SQL and inspecting qualified names.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_changeset_core::dialect::{DialectKind, ObjectQuoting, dialect_for};
use oxide_changeset_core::{GeneratorRegistry, InsertOrUpdateStatement, QualifiedName};

/// Dialect-aware upserts and qualified database object names.
#[derive(Parser)]
#[command(name = "oxide-changeset")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target database engine.
    #[arg(short, long, env = "OXIDE_CHANGESET_DIALECT", default_value = "h2")]
    dialect: DialectKind,

    /// Quote every identifier, not only those that require it.
    #[arg(long)]
    quote_all: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the upsert SQL for a JSON statement file.
    Upsert {
        /// Path to the statement file.
        file: PathBuf,
    },

    /// Inspect qualified names.
    #[command(subcommand)]
    Name(NameCommand),
}

#[derive(Subcommand)]
enum NameCommand {
    /// Print the labels, depth and canonical form of a name.
    Show {
        /// Dotted name, e.g. `catalog.schema.table`.
        name: String,
    },

    /// Compare two names.
    Compare {
        /// First dotted name.
        a: String,
        /// Second dotted name.
        b: String,
    },

    /// Keep only the most specific levels of a name.
    Truncate {
        /// Dotted name.
        name: String,
        /// Number of levels to keep.
        levels: usize,
    },
}

impl Cli {
    const fn quoting(&self) -> ObjectQuoting {
        if self.quote_all {
            ObjectQuoting::QuoteAll
        } else {
            ObjectQuoting::Legacy
        }
    }
}

fn load_statement(path: &Path) -> anyhow::Result<InsertOrUpdateStatement> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read statement file {}", path.display()))?;
    let statement = serde_json::from_str(&text)
        .with_context(|| format!("Invalid statement in {}", path.display()))?;
    Ok(statement)
}

fn upsert(cli: &Cli, file: &Path) -> anyhow::Result<String> {
    let statement = load_statement(file)?;
    debug!(table = %statement.table, columns = statement.columns.len(), "Loaded statement");

    let dialect = dialect_for(cli.dialect, cli.quoting());
    let sql = GeneratorRegistry::with_defaults().generate(&statement, dialect.as_ref())?;
    info!(dialect = %cli.dialect, table = %statement.table, "Rendered upsert");
    Ok(sql)
}

fn show_name(name: &QualifiedName) -> String {
    let labels: Vec<&str> = name
        .as_list()
        .iter()
        .map(|label| label.as_deref().unwrap_or("-"))
        .collect();
    format!(
        "name: {name}\nlabels: [{}]\ndepth: {}\nvirtual: {}\n",
        labels.join(", "),
        name.depth(),
        name.is_virtual()
    )
}

fn compare_names(a: &QualifiedName, b: &QualifiedName) -> String {
    format!(
        "equals (tolerant): {}\nequals (exact): {}\nmatches: {}\nleaf order: {:?}\n",
        a.equals(b, true),
        a.equals(b, false),
        a.matches(b),
        a.cmp_leaf(b)
    )
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Upsert { file } => upsert(cli, file),
        Commands::Name(NameCommand::Show { name }) => Ok(show_name(&QualifiedName::parse(name))),
        Commands::Name(NameCommand::Compare { a, b }) => Ok(compare_names(
            &QualifiedName::parse(a),
            &QualifiedName::parse(b),
        )),
        Commands::Name(NameCommand::Truncate { name, levels }) => {
            Ok(format!("{}\n", QualifiedName::parse(name).truncate(*levels)))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    print!("{}", run(&cli)?);
    Ok(())
}
