use crate::core::catalog;
use crate::core::decision::{decision_questions, DecisionMap};
use crate::core::error;
use crate::core::output;
use crate::core::tui;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Shown when a walk ends with every question declined.
pub const NO_SUGGESTION_MESSAGE: &str = "No specific archetype strongly suggested by this path. \
    Consider your feature's core goals or review the catalog with `archemap archetypes list`.";

// --- Walk reporting ---

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub prompt: &'static str,
    pub archetypes: &'static [&'static str],
}

pub fn question_views() -> Vec<QuestionView> {
    decision_questions()
        .iter()
        .enumerate()
        .map(|(index, q)| QuestionView {
            index,
            prompt: q.prompt,
            archetypes: q.archetypes,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct WalkStep {
    pub index: usize,
    pub prompt: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WalkReport {
    pub steps: Vec<WalkStep>,
    pub complete: bool,
    pub suggested: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Parse a comma-separated answer list ("y,n,yes,no") into affirm/decline
/// flags. Empty segments are skipped so trailing commas are harmless.
pub fn parse_answers(input: &str) -> Result<Vec<bool>, error::ArchemapError> {
    input
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .map(|s| match s.as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            other => Err(error::ArchemapError::ValidationError(format!(
                "Invalid answer '{}'. Use y/yes or n/no, comma-separated.",
                other
            ))),
        })
        .collect()
}

/// Replay a scripted answer list against a fresh walk. Answers beyond the
/// end of the walk are an error; too few answers produce an incomplete
/// report naming the next question.
pub fn walk_answers(answers: &[bool]) -> Result<WalkReport, error::ArchemapError> {
    let mut map = DecisionMap::new();
    let mut steps = Vec::new();

    for &affirmed in answers {
        let Some(question) = map.current_question() else {
            return Err(error::ArchemapError::ValidationError(format!(
                "Too many answers: the walk finished after {} of them.",
                steps.len()
            )));
        };
        steps.push(WalkStep {
            index: map.pointer(),
            prompt: question.prompt,
            answer: if affirmed { "yes" } else { "no" },
        });
        if affirmed {
            map.affirm();
        } else {
            map.decline();
        }
    }

    if map.is_finished() {
        let suggested: Vec<String> = map.result().iter().map(|a| a.name.to_string()).collect();
        let message = if suggested.is_empty() {
            Some(NO_SUGGESTION_MESSAGE.to_string())
        } else {
            None
        };
        Ok(WalkReport {
            steps,
            complete: true,
            suggested,
            message,
        })
    } else {
        let message = map
            .current_question()
            .map(|q| format!("Walk not finished. Next question: {}", q.prompt));
        Ok(WalkReport {
            steps,
            complete: false,
            suggested: Vec::new(),
            message,
        })
    }
}

fn print_walk_report(report: &WalkReport) {
    for step in &report.steps {
        println!(
            "{:>2}. [{}] {}",
            step.index + 1,
            step.answer,
            output::compact_line(step.prompt, 72)
        );
    }
    match (&report.message, report.complete) {
        (Some(message), _) => {
            println!();
            println!("{}", message);
        }
        (None, true) => {
            println!();
            println!("Based on your answers, consider these archetypes for your feature:");
            for name in &report.suggested {
                if let Some(archetype) = catalog::lookup_archetype(name) {
                    println!("  {} {}", archetype.icon.glyph(), archetype.name.bold());
                    println!("     {}", archetype.core_identity);
                }
            }
        }
        (None, false) => {}
    }
}

// --- Interactive wizard ---

fn run_wizard() -> Result<(), error::ArchemapError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut map = DecisionMap::new();

    tui::render_box(
        "UX ARCHETYPE DECISION MAP",
        "privacy & compliance",
        tui::BoxStyle::Info,
    );

    loop {
        while let Some(question) = map.current_question() {
            println!();
            tui::render_box(
                &format!("QUESTION {} OF {}", map.pointer() + 1, map.len()),
                "",
                tui::BoxStyle::Cyan,
            );
            tui::print_paragraph(question.prompt);
            println!();
            print!("{}[y]es / [n]o / [q]uit > ", tui::indent_prefix());
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            match line?.trim().to_lowercase().as_str() {
                "y" | "yes" => {
                    map.affirm();
                }
                "n" | "no" => {
                    map.decline();
                }
                "q" | "quit" => return Ok(()),
                _ => {
                    tui::print_line(&"Please answer y, n, or q.".yellow().to_string());
                }
            }
        }

        println!();
        if map.result().is_empty() {
            tui::render_box("NO STRONG MATCH", "", tui::BoxStyle::Warning);
            tui::print_paragraph(NO_SUGGESTION_MESSAGE);
        } else {
            tui::render_box("SUGGESTED ARCHETYPES", "", tui::BoxStyle::Success);
            tui::print_paragraph("Based on your answers, consider these archetypes for your feature:");
            println!();
            for archetype in map.result() {
                tui::print_line(&format!(
                    "{} {}",
                    archetype.icon.glyph(),
                    archetype.name.bold()
                ));
                tui::print_paragraph(archetype.core_identity);
                println!();
            }
        }

        print!("{}Start over? [y/N] > ", tui::indent_prefix());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim().to_lowercase().as_str() {
            "y" | "yes" => map.reset(),
            _ => return Ok(()),
        }
    }
}

// --- CLI ---

#[derive(Parser, Debug)]
#[clap(
    name = "map",
    about = "Walk yes/no questions to the archetypes a feature serves."
)]
pub struct MapCli {
    #[clap(subcommand)]
    pub command: MapCommand,
}

#[derive(Subcommand, Debug)]
pub enum MapCommand {
    /// Walk the decision map interactively.
    Run,
    /// Walk the decision map from a scripted answer list.
    Walk {
        /// Answers in walk order, e.g. "n,n,y" (y/yes affirms, n/no declines)
        #[clap(long)]
        answers: String,
        /// Output format (text or json)
        #[clap(long, default_value = "text")]
        format: String,
    },
    /// List the map's questions in order.
    Questions {
        /// Output format (text or json)
        #[clap(long, default_value = "text")]
        format: String,
    },
    /// Suggest archetypes by matching a feature description against keywords.
    Suggest {
        /// Free-text description of the feature
        #[clap(long)]
        prompt: String,
    },
    /// Print JSON schema for the map subsystem.
    Schema,
}

// --- Schema export ---

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "map",
        "version": "0.1.0",
        "description": "Linear yes/no decision map from feature to archetypes",
        "commands": [
            { "name": "run", "description": "Walk the decision map interactively" },
            { "name": "walk", "description": "Walk the map from a scripted answer list" },
            { "name": "questions", "description": "List the map's questions in order" },
            { "name": "suggest", "description": "Suggest archetypes for a feature description" },
            { "name": "schema", "description": "Print subsystem schema" }
        ],
        "questions": decision_questions().iter().enumerate().map(|(i, q)| serde_json::json!({
            "index": i,
            "prompt": q.prompt,
            "archetypes": q.archetypes,
        })).collect::<Vec<_>>(),
    })
}

// --- CLI dispatch ---

pub fn run_map_cli(cli: MapCli) -> Result<(), error::ArchemapError> {
    match cli.command {
        MapCommand::Run => run_wizard()?,

        MapCommand::Walk { answers, format } => {
            let report = walk_answers(&parse_answers(&answers)?)?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            } else {
                print_walk_report(&report);
            }
        }

        MapCommand::Questions { format } => {
            let views = question_views();
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&views).unwrap());
            } else {
                println!("The map asks these in order. The first \"yes\" decides.");
                for view in &views {
                    println!();
                    println!("{:>2}. {}", view.index + 1, view.prompt);
                    println!("    suggests: {}", view.archetypes.join(", ").cyan());
                }
            }
        }

        MapCommand::Suggest { prompt } => {
            let suggestions = catalog::suggest_archetypes(&prompt);
            println!("{}", serde_json::to_string_pretty(&suggestions).unwrap());
        }

        MapCommand::Schema => {
            println!("{}", serde_json::to_string_pretty(&schema()).unwrap());
        }
    }

    Ok(())
}
