//! Archemap: UX Archetypes for Privacy & Compliance
//!
//! **Archemap is a terminal decision map and catalog for privacy/compliance UX work.**
//!
//! A practical decision-making tool for UX designers and Product Managers,
//! helping to align features with the mindsets of the privacy and compliance
//! professionals who will use them. All archetype and question data is compiled
//! into the binary; every invocation starts from a clean slate.
//!
//! # Subsystems
//!
//! - `map`: Linear yes/no decision map that suggests archetypes for a feature
//! - `archetypes`: Static archetype catalog with grid and cards views
//! - `guide`: Embedded field guides on applying archetypes
//!
//! # Examples
//!
//! ```bash
//! # Walk the decision map interactively
//! archemap map run
//!
//! # Replay a recorded answer sequence
//! archemap map walk --answers n,n,y
//!
//! # Match a feature description against archetype keywords
//! archemap map suggest --prompt "automated audit log export"
//!
//! # Browse the catalog
//! archemap archetypes list --view cards
//! archemap archetypes show "The Rule Master"
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: Catalog data, decision map state machine, terminal rendering
//! - [`plugins`]: Subsystem CLIs (map, archetypes, guide)

pub mod core;
pub mod plugins;

use core::error;
use plugins::{browse, guide, map};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "archemap",
    version = env!("CARGO_PKG_VERSION"),
    about = "UX archetype decision map for privacy & compliance features"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct SchemaCli {
    /// Format: json | md
    #[clap(long, default_value = "json")]
    format: String,
    /// Optional: filter by subsystem name
    #[clap(long)]
    subsystem: Option<String>,
    /// Force deterministic output (removes volatile timestamps)
    #[clap(long)]
    deterministic: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decision map: find the archetypes a feature serves
    #[clap(name = "map", visible_alias = "m")]
    Map(map::MapCli),

    /// Browse the archetype catalog
    #[clap(name = "archetypes", visible_alias = "a")]
    Archetypes(browse::BrowseCli),

    /// Field guides for applying archetypes
    #[clap(name = "guide", visible_alias = "g")]
    Guide(guide::GuideCli),

    /// Subsystem schemas and discovery
    #[clap(name = "schema")]
    Schema(SchemaCli),

    /// Show version information
    #[clap(name = "version")]
    Version,
}

pub fn run() -> Result<(), error::ArchemapError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            // Version command - simple output for scripts/parsing
            println!("v{}", env!("CARGO_PKG_VERSION"));
        }
        Command::Map(map_cli) => {
            map::run_map_cli(map_cli)?;
        }
        Command::Archetypes(browse_cli) => {
            browse::run_browse_cli(browse_cli)?;
        }
        Command::Guide(guide_cli) => {
            guide::run_guide_cli(guide_cli)?;
        }
        Command::Schema(schema_cli) => {
            let mut schemas = std::collections::BTreeMap::new();
            schemas.insert("map", map::schema());
            schemas.insert("archetypes", browse::schema());
            schemas.insert("guide", guide::schema());

            let output = if let Some(sub) = schema_cli.subsystem {
                schemas
                    .get(sub.as_str())
                    .cloned()
                    .unwrap_or(serde_json::json!({ "error": "subsystem not found" }))
            } else {
                let mut envelope = serde_json::json!({
                    "schema_version": "1.0.0",
                    "subsystems": schemas
                });
                if !schema_cli.deterministic {
                    envelope.as_object_mut().unwrap().insert(
                        "generated_at".to_string(),
                        serde_json::json!(format!("{:?}", std::time::SystemTime::now())),
                    );
                }
                envelope
            };

            if schema_cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!("Markdown schema format not yet implemented. Defaulting to JSON.");
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
        }
    }
    Ok(())
}
