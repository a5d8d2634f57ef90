use crate::core::error;
use crate::core::output;
use crate::core::store::{Session, Store};
use crate::core::time;
use crate::core::tui;
use crate::plugins::projects::{self, ProjectKind};
use clap::{Parser, Subcommand};

/// The styles the assistant knows. Lookup is by exact label.
pub const STYLES: &[&str] = &["Moderno", "Clásico", "Industrial", "Minimalista"];

/// Placeholder body for labels outside the table.
pub const UNAVAILABLE: &str = "Estilo no disponible";

/// History views show the most recent proposals only.
const HISTORY_LIMIT: usize = 5;

/// Static recommendation text per style, embedded at compile time.
pub fn recommendation(label: &str) -> Option<&'static str> {
    let body = match label {
        "Moderno" => include_str!("../../content/styles/moderno.md"),
        "Clásico" => include_str!("../../content/styles/clasico.md"),
        "Industrial" => include_str!("../../content/styles/industrial.md"),
        "Minimalista" => include_str!("../../content/styles/minimalista.md"),
        _ => return None,
    };
    Some(body.trim_end())
}

/// The full proposal block for a style. An unknown label still produces
/// the frame, with the fixed placeholder as the body.
pub fn proposal_text(label: &str) -> String {
    let body = recommendation(label).unwrap_or(UNAVAILABLE);
    format!("Propuesta para estilo {}:\n\n{}", label, body)
}

#[derive(Parser, Debug)]
#[clap(name = "assistant", about = "Canned-response design assistant.")]
pub struct AssistantCli {
    /// Act as this user (defaults to the first profile in the store).
    #[clap(long, global = true)]
    user: Option<String>,
    #[clap(subcommand)]
    command: AssistantCommand,
}

#[derive(Subcommand, Debug)]
pub enum AssistantCommand {
    /// List the known styles.
    Styles,
    /// Generate the recommendation for a style.
    Suggest {
        #[clap(long)]
        style: String,
        /// Save the generated proposal to the user's projects.
        #[clap(long)]
        save: bool,
    },
    /// Show the most recent saved proposals.
    History,
}

pub fn run_assistant_cli(store: &Store, cli: AssistantCli) -> Result<(), error::DercorError> {
    use colored::Colorize;

    match cli.command {
        AssistantCommand::Styles => {
            for style in STYLES {
                println!("{}", style);
            }
        }
        AssistantCommand::Suggest { style, save } => {
            let text = proposal_text(&style);
            println!("{}", text);
            if save {
                let session = Session::resolve(store, cli.user.as_deref())?;
                projects::save_proposal(store, session.user.id, &style, &text)?;
                println!();
                tui::render_box(
                    "Propuesta Guardada",
                    "La propuesta se ha guardado en tus proyectos",
                    tui::BoxStyle::Success,
                );
            }
        }
        AssistantCommand::History => {
            let session = Session::resolve(store, cli.user.as_deref())?;
            let items =
                projects::list_projects(store, session.user.id, Some(ProjectKind::Propuesta))?;
            if items.is_empty() {
                tui::render_box("Sin Historial", "No hay propuestas guardadas", tui::BoxStyle::Info);
                return Ok(());
            }
            for p in items.iter().take(HISTORY_LIMIT) {
                println!(
                    "{} - {}",
                    p.name.bright_white().bold(),
                    time::date_part(&p.created_at).bright_black()
                );
                println!("  {}", output::compact_line(&p.payload, 80));
            }
        }
    }
    Ok(())
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "assistant",
        "version": "0.1.0",
        "description": "Static style recommendations keyed by label",
        "commands": [
            { "name": "styles" },
            { "name": "suggest", "parameters": ["style", "save"] },
            { "name": "history" }
        ],
        "storage": []
    })
}
