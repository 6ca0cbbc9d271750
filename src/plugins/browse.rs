use crate::core::catalog::{self, Archetype, ArchetypeGroup};
use crate::core::error;
use crate::core::output;
use crate::core::tui;
use clap::{Parser, Subcommand};
use colored::Colorize;

// --- Rendering ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewMode {
    /// Comparison table, one row per archetype
    Grid,
    /// Full detail cards
    Cards,
}

fn tint(group: ArchetypeGroup, text: &str) -> colored::ColoredString {
    match group {
        ArchetypeGroup::Privacy => text.bright_blue(),
        ArchetypeGroup::Compliance => text.bright_green(),
    }
}

/// Wrap each cell to its column width and emit the row line by line.
/// Cells are padded before any color is applied, so escape codes never
/// skew the alignment.
fn grid_row_lines(cells: &[String], widths: &[usize]) -> Vec<String> {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| output::wrap_text(cell, w))
        .collect();
    let height = wrapped.iter().map(|lines| lines.len()).max().unwrap_or(1);
    (0..height)
        .map(|row| {
            wrapped
                .iter()
                .zip(widths)
                .map(|(lines, &w)| {
                    let cell = lines.get(row).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", cell, width = w)
                })
                .collect::<Vec<_>>()
                .join(" │ ")
        })
        .collect()
}

fn render_grid(archetypes: &[&'static Archetype]) {
    let width = tui::terminal_width().clamp(76, 120);
    let name_width = 18usize;
    let content_width = (width.saturating_sub(name_width + 12) / 4).max(12);
    let widths = [
        name_width,
        content_width,
        content_width,
        content_width,
        content_width,
    ];
    let total = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

    let headers: Vec<String> = ["Archetype", "Key Traits", "Goals", "Challenges", "UX Needs"]
        .iter()
        .map(|h| h.to_uppercase())
        .collect();
    for line in grid_row_lines(&headers, &widths) {
        println!("{}", line.bold());
    }
    println!("{}", tui::rule(total));

    for group in [ArchetypeGroup::Privacy, ArchetypeGroup::Compliance] {
        let members: Vec<&&Archetype> = archetypes.iter().filter(|a| a.group == group).collect();
        if members.is_empty() {
            continue;
        }
        println!("{}", tint(group, &group.label().to_uppercase()).bold());
        for archetype in members {
            let cells = vec![
                format!("{} {}", archetype.icon.glyph(), archetype.name),
                archetype.key_traits.to_string(),
                archetype.goals.to_string(),
                archetype.challenges.to_string(),
                archetype.ux_needs.to_string(),
            ];
            for line in grid_row_lines(&cells, &widths) {
                println!("{}", line);
            }
            println!("{}", tui::rule(total));
        }
    }
}

fn print_field(label: &str, value: &str, width: usize) {
    let label_col = 15usize;
    let lines = output::wrap_text(value, width.saturating_sub(label_col).max(20));
    let padded = format!("{:<15}", format!("{}:", label));
    println!("{}{}", padded.bold(), lines[0]);
    for line in &lines[1..] {
        println!("{:<15}{}", "", line);
    }
}

fn render_cards(archetypes: &[&'static Archetype]) {
    let width = tui::terminal_width().clamp(60, 100);
    for archetype in archetypes {
        println!("{}", tui::rule(width));
        println!("{} {}", archetype.icon.glyph(), archetype.name.bold());
        println!("{}", tint(archetype.group, archetype.group.label()));
        println!();
        print_field("Core Identity", archetype.core_identity, width);
        print_field("Key Traits", archetype.key_traits, width);
        print_field("Goals", archetype.goals, width);
        print_field("Challenges", archetype.challenges, width);
        print_field("UX Needs", archetype.ux_needs, width);
        print_field("PM Focus", archetype.pm_focus, width);
        println!();
        println!("{}", "Key Questions for Feature:".bold());
        for question in archetype.key_questions {
            println!("  • {}", question);
        }
        println!();
        println!("{} {}", "Keywords:".bold(), archetype.keywords.join(", "));
        println!();
    }
}

// --- CLI ---

#[derive(Parser, Debug)]
#[clap(
    name = "archetypes",
    about = "Browse the archetype catalog as a comparison grid or detail cards."
)]
pub struct BrowseCli {
    #[clap(subcommand)]
    pub command: BrowseCommand,
}

#[derive(Subcommand, Debug)]
pub enum BrowseCommand {
    /// List catalog archetypes.
    List {
        /// Text layout
        #[clap(long, value_enum, default_value = "grid")]
        view: ViewMode,
        /// Only show one group
        #[clap(long, value_enum)]
        group: Option<ArchetypeGroup>,
        /// Regex filter over archetype names
        #[clap(long)]
        filter: Option<String>,
        /// Output format (text or json)
        #[clap(long, default_value = "text")]
        format: String,
    },
    /// Show a single archetype by name.
    Show {
        /// Exact archetype name, e.g. "The Vigilant Guardian"
        name: String,
        /// Output format (text or json)
        #[clap(long, default_value = "text")]
        format: String,
    },
    /// Print JSON schema for the archetypes subsystem.
    Schema,
}

// --- Schema export ---

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "archetypes",
        "version": "0.1.0",
        "description": "Static catalog of privacy and compliance UX archetypes",
        "commands": [
            { "name": "list", "description": "List catalog archetypes (grid or cards)" },
            { "name": "show", "description": "Show a single archetype by name" },
            { "name": "schema", "description": "Print subsystem schema" }
        ],
        "groups": [
            ArchetypeGroup::Privacy.label(),
            ArchetypeGroup::Compliance.label(),
        ],
        "archetypes": catalog::archetypes().iter().map(|a| serde_json::json!({
            "name": a.name,
            "group": a.group.label(),
        })).collect::<Vec<_>>(),
    })
}

// --- CLI dispatch ---

pub fn run_browse_cli(cli: BrowseCli) -> Result<(), error::ArchemapError> {
    match cli.command {
        BrowseCommand::List {
            view,
            group,
            filter,
            format,
        } => {
            let listed = catalog::filter_archetypes(group, filter.as_deref())?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&listed).unwrap());
            } else if listed.is_empty() {
                println!("No archetypes match the given filters.");
            } else {
                match view {
                    ViewMode::Grid => render_grid(&listed),
                    ViewMode::Cards => render_cards(&listed),
                }
            }
        }

        BrowseCommand::Show { name, format } => {
            let archetype = catalog::find_archetype(&name)?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(archetype).unwrap());
            } else {
                render_cards(&[archetype]);
            }
        }

        BrowseCommand::Schema => {
            println!("{}", serde_json::to_string_pretty(&schema()).unwrap());
        }
    }

    Ok(())
}
