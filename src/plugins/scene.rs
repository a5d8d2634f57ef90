use crate::core::assets::{self, AssetSource};
use crate::core::error;
use crate::core::schemas;
use crate::core::store::{Session, Store};
use crate::core::time;
use crate::core::tui;
use crate::plugins::projects::{self, ProjectKind};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default drop point for new placements (the center of the original
/// 400x700 canvas). The GUI replaces this with the live canvas center.
pub const DEFAULT_ANCHOR: [f64; 2] = [200.0, 350.0];

/// Furniture the canvas can place, with the graphic and default footprint
/// each kind starts with.
pub struct FurnitureSpec {
    pub kind: &'static str,
    pub asset: &'static str,
    pub size: (u32, u32),
}

pub const FURNITURE: &[FurnitureSpec] = &[
    FurnitureSpec { kind: "sofa", asset: "sofa.png", size: (200, 150) },
    FurnitureSpec { kind: "mesa", asset: "mesa.png", size: (150, 150) },
    FurnitureSpec { kind: "lampara", asset: "lampara.png", size: (100, 150) },
];

pub fn furniture_spec(kind: &str) -> Option<&'static FurnitureSpec> {
    FURNITURE.iter().find(|spec| spec.kind == kind)
}

/// One furniture instance in a scene. The wire field for the kind tag is
/// `type`, matching payloads written by existing frontends.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Placement {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: [f64; 2],
    pub rotation: f64,
    pub scale: f64,
}

/// A session-local ordered sequence of placements. Ephemeral until
/// explicitly saved; saving serializes the whole list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    placements: Vec<Placement>,
}

impl Scene {
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Append a placement for `kind` at the anchor with the default
    /// transform. Unknown kinds and kinds whose graphic cannot be
    /// resolved (not even the placeholder) are skipped.
    pub fn add(
        &mut self,
        kind: &str,
        anchor: [f64; 2],
        source: &dyn AssetSource,
    ) -> Option<&Placement> {
        let spec = furniture_spec(kind)?;
        assets::resolve_asset(source, spec.asset)?;

        self.placements.push(Placement {
            kind: spec.kind.to_string(),
            position: anchor,
            rotation: 0.0,
            scale: 1.0,
        });
        self.placements.last()
    }

    pub fn clear(&mut self) {
        self.placements.clear();
    }

    /// Serialize to the project payload encoding: a JSON array of
    /// `{"type", "position", "rotation", "scale"}` objects.
    pub fn to_payload(&self) -> Result<String, error::DercorError> {
        serde_json::to_string(&self.placements).map_err(error::DercorError::JsonError)
    }

    /// Replace the scene with a saved payload. The whole payload is parsed
    /// before anything is touched, so malformed input leaves the current
    /// scene intact. Each record is re-created at a fresh default
    /// transform; the persisted position/rotation/scale are discarded
    /// (upstream behavior, kept as-is). Returns how many placements were
    /// re-created.
    pub fn load_payload(
        &mut self,
        payload: &str,
        anchor: [f64; 2],
        source: &dyn AssetSource,
    ) -> Result<usize, error::DercorError> {
        let records = parse_payload(payload)?;
        self.clear();
        let mut added = 0;
        for record in &records {
            if self.add(&record.kind, anchor, source).is_some() {
                added += 1;
            }
        }
        Ok(added)
    }
}

/// Decode a payload without touching any scene.
pub fn parse_payload(payload: &str) -> Result<Vec<Placement>, error::DercorError> {
    serde_json::from_str(payload).map_err(error::DercorError::JsonError)
}

// --- CLI draft scene ---
//
// The CLI keeps the working scene as a draft file under the store root so
// it survives between invocations (one invocation per user action).

pub fn draft_path(root: &Path) -> PathBuf {
    root.join(schemas::SCENE_DRAFT_NAME)
}

pub fn load_draft(store: &Store) -> Result<Scene, error::DercorError> {
    let path = draft_path(&store.root);
    if !path.is_file() {
        return Ok(Scene::default());
    }
    let raw = fs::read_to_string(&path).map_err(error::DercorError::IoError)?;
    if raw.trim().is_empty() {
        return Ok(Scene::default());
    }
    Ok(Scene {
        placements: parse_payload(&raw)?,
    })
}

pub fn save_draft(store: &Store, scene: &Scene) -> Result<(), error::DercorError> {
    fs::write(draft_path(&store.root), scene.to_payload()?).map_err(error::DercorError::IoError)
}

#[derive(Parser, Debug)]
#[clap(name = "scene", about = "Draft and save AR furniture scenes.")]
pub struct SceneCli {
    /// Act as this user (defaults to the first profile in the store).
    #[clap(long, global = true)]
    user: Option<String>,
    #[clap(subcommand)]
    command: SceneCommand,
}

#[derive(Subcommand, Debug)]
pub enum SceneCommand {
    /// Add one furniture piece to the draft (sofa, mesa, lampara).
    Add {
        #[clap(value_name = "KIND")]
        kind: String,
    },
    /// Show the draft scene.
    Show,
    /// Remove every placement from the draft.
    Clear,
    /// Save the draft as a project.
    Save {
        /// Display name (defaults to "Escena AR {dd/mm HH:MM}").
        #[clap(long)]
        name: Option<String>,
    },
    /// Load a saved scene into the draft.
    Load {
        #[clap(long)]
        id: i64,
    },
    /// List the user's saved scenes.
    List,
    /// List the furniture kinds the canvas can place.
    Furniture,
}

pub fn run_scene_cli(
    store: &Store,
    source: &dyn AssetSource,
    cli: SceneCli,
) -> Result<(), error::DercorError> {
    use colored::Colorize;

    match cli.command {
        SceneCommand::Add { kind } => {
            let mut draft = load_draft(store)?;
            match draft.add(&kind, DEFAULT_ANCHOR, source) {
                Some(_) => {
                    save_draft(store, &draft)?;
                    tui::render_box(
                        "Mueble Agregado",
                        &format!("{} piezas en la escena", draft.len()),
                        tui::BoxStyle::Success,
                    );
                }
                None => {
                    tui::render_box(
                        "Mueble No Disponible",
                        "Tipo desconocido o sin gráfico",
                        tui::BoxStyle::Warning,
                    );
                }
            }
        }
        SceneCommand::Show => {
            let draft = load_draft(store)?;
            if draft.is_empty() {
                tui::render_box(
                    "Escena Vacía",
                    "Agrega muebles con 'scene add'",
                    tui::BoxStyle::Info,
                );
                return Ok(());
            }
            for (i, p) in draft.placements().iter().enumerate() {
                println!(
                    "{} {} @ ({:.0}, {:.0})  rot {:.0}°  escala {:.2}",
                    format!("{}.", i + 1).bright_black(),
                    p.kind.bright_white().bold(),
                    p.position[0],
                    p.position[1],
                    p.rotation,
                    p.scale
                );
            }
        }
        SceneCommand::Clear => {
            save_draft(store, &Scene::default())?;
            tui::render_box("Escena Limpia", "", tui::BoxStyle::Success);
        }
        SceneCommand::Save { name } => {
            let draft = load_draft(store)?;
            if draft.is_empty() {
                tui::render_box(
                    "Escena Vacía",
                    "No hay nada que guardar",
                    tui::BoxStyle::Warning,
                );
                return Ok(());
            }
            let session = Session::resolve(store, cli.user.as_deref())?;
            let name = name.unwrap_or_else(|| format!("Escena AR {}", time::scene_stamp()));
            let payload = draft.to_payload()?;
            projects::save_ar_scene(store, session.user.id, &name, &payload)?;
            tui::render_box(
                "Escena Guardada",
                "La escena se ha guardado en tus proyectos",
                tui::BoxStyle::Success,
            );
        }
        SceneCommand::Load { id } => {
            let session = Session::resolve(store, cli.user.as_deref())?;
            let project = projects::get_project(store, id)?;
            let Some(project) = project else {
                tui::render_box("Error", "No existe esa escena", tui::BoxStyle::Warning);
                return Ok(());
            };
            if project.user_id != session.user.id || project.kind != ProjectKind::Ar.as_str() {
                tui::render_box("Error", "No existe esa escena", tui::BoxStyle::Warning);
                return Ok(());
            }
            let mut draft = load_draft(store)?;
            match draft.load_payload(&project.payload, DEFAULT_ANCHOR, source) {
                Ok(added) => {
                    save_draft(store, &draft)?;
                    tui::render_box(
                        "Escena Cargada",
                        &format!("Escena cargada correctamente ({} piezas)", added),
                        tui::BoxStyle::Success,
                    );
                }
                Err(_) => {
                    tui::render_box("Error", "Error al cargar la escena", tui::BoxStyle::Error);
                }
            }
        }
        SceneCommand::Furniture => {
            for spec in FURNITURE {
                println!(
                    "{}  {}x{}  ({})",
                    spec.kind.bright_white().bold(),
                    spec.size.0,
                    spec.size.1,
                    spec.asset
                );
            }
        }
        SceneCommand::List => {
            let session = Session::resolve(store, cli.user.as_deref())?;
            let items = projects::list_projects(store, session.user.id, Some(ProjectKind::Ar))?;
            if items.is_empty() {
                tui::render_box("Sin Escenas", "No hay escenas AR guardadas", tui::BoxStyle::Info);
                return Ok(());
            }
            for p in items.iter().take(5) {
                println!(
                    "{}  {} - {}",
                    format!("#{}", p.id).bright_black(),
                    p.name.bright_white(),
                    time::date_part(&p.created_at).bright_black()
                );
            }
        }
    }
    Ok(())
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "scene",
        "version": "0.1.0",
        "description": "In-memory AR scene with a persistent CLI draft",
        "commands": [
            { "name": "add", "parameters": ["kind"] },
            { "name": "show" },
            { "name": "clear" },
            { "name": "save", "parameters": ["name"] },
            { "name": "load", "parameters": ["id"] },
            { "name": "list" },
            { "name": "furniture" }
        ],
        "storage": [schemas::SCENE_DRAFT_NAME]
    })
}
