use std::env;

const MIN_BOX_WIDTH: usize = 40;
const MAX_BOX_WIDTH: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoxStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemStatus {
    Created,
    Unchanged,
    Skipped,
    Failed,
    Info,
}

impl ItemStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            ItemStatus::Created => "✨",
            ItemStatus::Unchanged => "➖",
            ItemStatus::Skipped => "⏭",
            ItemStatus::Failed => "💥",
            ItemStatus::Info => "💡",
        }
    }
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

pub fn box_top(width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    format!("╔{}╗", "═".repeat(w - 2))
}

pub fn box_bottom(width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    format!("╚{}╝", "═".repeat(w - 2))
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

/// Render a centered notice box. This is the CLI's notification sink:
/// success/failure notices from every command group route through here.
pub fn render_box(title: &str, subtitle: &str, style: BoxStyle) {
    use colored::Colorize;

    let width = effective_width();

    match style {
        BoxStyle::Info => {
            println!("{}", box_top(width).bright_cyan());
            println!("{}", box_row("║", title, "║", width).bright_cyan().bold());
            if !subtitle.is_empty() {
                println!("{}", box_row("║", subtitle, "║", width).cyan());
            }
            println!("{}", box_bottom(width).bright_cyan());
        }
        BoxStyle::Success => {
            println!("{}", box_top(width).bright_green());
            println!("{}", box_row("║", title, "║", width).bright_green().bold());
            if !subtitle.is_empty() {
                println!("{}", box_row("║", subtitle, "║", width).green());
            }
            println!("{}", box_bottom(width).bright_green());
        }
        BoxStyle::Warning => {
            println!("{}", box_top(width).bright_yellow());
            println!("{}", box_row("║", title, "║", width).bright_yellow().bold());
            if !subtitle.is_empty() {
                println!("{}", box_row("║", subtitle, "║", width).yellow());
            }
            println!("{}", box_bottom(width).bright_yellow());
        }
        BoxStyle::Error => {
            println!("{}", box_top(width).bright_red());
            println!("{}", box_row("║", title, "║", width).bright_red().bold());
            if !subtitle.is_empty() {
                println!("{}", box_row("║", subtitle, "║", width).red());
            }
            println!("{}", box_bottom(width).bright_red());
        }
    }
}

/// One status line in a command summary, e.g. `  ✨ productos (seeded)`.
pub fn status_line(status: ItemStatus, label: &str, note: &str) {
    use colored::Colorize;

    let text = if note.is_empty() {
        label.to_string()
    } else {
        format!("{} ({})", label, note)
    };
    match status {
        ItemStatus::Created => println!("  {} {}", status.icon(), text.bright_green()),
        ItemStatus::Unchanged => println!("  {} {}", status.icon(), text.bright_black()),
        ItemStatus::Skipped => println!("  {} {}", status.icon(), text.yellow()),
        ItemStatus::Failed => println!("  {} {}", status.icon(), text.bright_red()),
        ItemStatus::Info => println!("  {} {}", status.icon(), text.bright_cyan()),
    }
}
