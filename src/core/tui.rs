use crate::core::output;
use std::env;

const MIN_BOX_WIDTH: usize = 40;
const MAX_BOX_WIDTH: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoxStyle {
    Info,
    Success,
    Warning,
    Cyan,
}

pub fn terminal_width() -> usize {
    env::var("TERM_WIDTH")
        .ok()
        .and_then(|w| w.parse().ok())
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
        .unwrap_or(80)
}

fn effective_width() -> usize {
    terminal_width().max(MIN_BOX_WIDTH).min(MAX_BOX_WIDTH)
}

fn indent() -> usize {
    (terminal_width().saturating_sub(effective_width())) / 2
}

/// Left margin used by everything printed alongside the centered boxes.
pub fn indent_prefix() -> String {
    " ".repeat(indent() + 2)
}

pub fn box_top(width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    format!("╔{}{}╗", "═".repeat(w - 2), "═")
}

pub fn box_bottom(width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    format!("╚{}{}╝", "═".repeat(w - 2), "═")
}

pub fn box_row(left: &str, content: &str, right: &str, width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    let content_len = content.chars().count();
    let padding = w.saturating_sub(2).saturating_sub(content_len);
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;
    format!(
        "{}{}{}{}{}",
        left,
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad),
        right
    )
}

pub fn render_box(title: &str, subtitle: &str, style: BoxStyle) {
    use colored::Colorize;

    let width = effective_width();
    let indent_s = " ".repeat(indent());

    match style {
        BoxStyle::Info => {
            println!("{} 💙", indent_s);
            println!("{}{}", indent_s, box_top(width).bright_cyan());
            println!(
                "{}{}",
                indent_s,
                box_row("║", title, "║", width).bright_cyan().bold()
            );
            if !subtitle.is_empty() {
                println!("{}{}", indent_s, box_row("║", subtitle, "║", width).cyan());
            }
            println!("{}{}", indent_s, box_bottom(width).bright_cyan());
        }
        BoxStyle::Success => {
            println!("{} 💚", indent_s);
            println!("{}{}", indent_s, box_top(width).bright_green());
            println!(
                "{}{}",
                indent_s,
                box_row("║", title, "║", width).bright_green().bold()
            );
            if !subtitle.is_empty() {
                println!("{}{}", indent_s, box_row("║", subtitle, "║", width).green());
            }
            println!("{}{}", indent_s, box_bottom(width).bright_green());
        }
        BoxStyle::Warning => {
            println!("{} 💛", indent_s);
            println!("{}{}", indent_s, box_top(width).bright_yellow());
            println!(
                "{}{}",
                indent_s,
                box_row("║", title, "║", width).bright_yellow().bold()
            );
            if !subtitle.is_empty() {
                println!(
                    "{}{}",
                    indent_s,
                    box_row("║", subtitle, "║", width).yellow()
                );
            }
            println!("{}{}", indent_s, box_bottom(width).bright_yellow());
        }
        BoxStyle::Cyan => {
            println!("{} 💙", indent_s);
            println!("{}{}", indent_s, box_top(width).bright_cyan());
            println!(
                "{}{}",
                indent_s,
                box_row("║", title, "║", width).bright_cyan().bold()
            );
            if !subtitle.is_empty() {
                println!("{}{}", indent_s, box_row("║", subtitle, "║", width).cyan());
            }
            println!("{}{}", indent_s, box_bottom(width).bright_cyan());
        }
    }
}

/// Print one line at the standard margin. Callers color the text.
pub fn print_line(text: &str) {
    println!("{}{}", indent_prefix(), text);
}

/// Word-wrap a paragraph to the box content width and print it at the
/// standard margin.
pub fn print_paragraph(text: &str) {
    let width = effective_width().saturating_sub(4);
    for line in output::wrap_text(text, width) {
        print_line(&line);
    }
}

pub fn rule(width: usize) -> String {
    "─".repeat(width)
}
