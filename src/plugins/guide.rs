//! Field guide CLI for the embedded practice guides.
//!
//! The guides explain how to put the archetypes to work: running the
//! decision map, why archetype-driven design matters, and roadmap
//! principles. They ship inside the binary; `guide show` reads them
//! without touching the filesystem.

use crate::core::{assets, error};
use clap::Subcommand;

#[derive(clap::Args, Debug)]
pub struct GuideCli {
    #[clap(subcommand)]
    pub command: GuideCommand,
}

#[derive(Subcommand, Debug)]
pub enum GuideCommand {
    /// List all embedded field guides.
    List,
    /// Display the content of a specific guide.
    Show {
        #[clap(value_parser)]
        path: String,
    },
    /// Dump all guides with begin/end markers for piping into other tools.
    Ingest,
    /// Print JSON schema for the guide subsystem.
    Schema,
}

pub fn run_guide_cli(cli: GuideCli) -> Result<(), error::ArchemapError> {
    match cli.command {
        GuideCommand::List => {
            println!("Embedded field guides:");
            for guide in assets::list_guides() {
                println!("- {}", guide);
            }
            Ok(())
        }
        GuideCommand::Show { path } => match assets::get_guide(&path) {
            Some(content) => {
                println!("{}", content);
                Ok(())
            }
            None => Err(error::ArchemapError::NotFound(format!(
                "Guide not found: '{}'. Available: {}",
                path,
                assets::list_guides().join(", ")
            ))),
        },
        GuideCommand::Ingest => {
            for path in assets::list_guides() {
                if let Some(content) = assets::get_guide(path) {
                    println!("--- BEGIN {} ---", path);
                    println!("{}", content);
                    println!("--- END {} ---", path);
                }
            }
            Ok(())
        }
        GuideCommand::Schema => {
            println!("{}", serde_json::to_string_pretty(&schema()).unwrap());
            Ok(())
        }
    }
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "guide",
        "type": "object",
        "properties": {
            "list": {
                "type": "null",
                "description": "List all embedded field guides"
            },
            "show": {
                "type": "string",
                "description": "Display a specific guide"
            },
            "ingest": {
                "type": "null",
                "description": "Dump all guides with begin/end markers"
            }
        },
        "guides": assets::list_guides(),
    })
}
