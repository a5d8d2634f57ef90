//! Dercor: a local-first interior design studio core.
//!
//! Dercor is the storage and logic core of an interior-design app: a
//! seeded furniture catalog, a canned-response style assistant, an AR
//! furniture-placement scene model, and per-user saved-project history.
//! All durable state lives in one SQLite file under a local data
//! directory; the GUI frontends consume this crate, and the bundled CLI
//! drives every operation directly.
//!
//! # Core Principles
//!
//! - **Local-first**: one SQLite file, no network, no daemon
//! - **Per-call connections**: every operation opens, commits, and closes
//! - **Audited mutations**: all state access routes through the broker,
//!   which appends a JSONL event per operation
//! - **Idempotent bootstrap**: schema creation and seeding are safe on
//!   every startup
//!
//! # Architecture
//!
//! All state access routes through [`core::broker::DbBroker`] for
//! serialization and audit logging. Subsystems own their tables and
//! register their initializers in `subsystems.rs`.
//!
//! ## Subsystems (Plugins)
//!
//! - `catalog`: the seeded furniture catalog (read-only after seeding)
//! - `profile`: user profiles and renames
//! - `projects`: saved style proposals and AR scenes
//! - `assistant`: static style recommendations
//! - `scene`: the in-memory AR scene model and its CLI draft
//!
//! # Examples
//!
//! ```bash
//! # Initialize the studio store
//! dercor init
//!
//! # Browse the catalog
//! dercor catalog list
//!
//! # Generate and save a proposal
//! dercor assistant suggest --style Moderno --save
//!
//! # Draft and save an AR scene
//! dercor scene add sofa
//! dercor scene save
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: connection setup, broker, schemas, store/session context,
//!   config, timestamps, asset resolution, terminal output
//! - [`plugins`]: subsystem implementations

pub mod core;
pub mod plugins;
mod subsystems;

use crate::core::assets::FsAssets;
use crate::core::config::StudioConfig;
use crate::core::{broker, db, error, store::Store, tui};
use crate::plugins::{assistant, catalog, profile, projects, scene};

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(
    name = "dercor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dercor is a local-first interior design studio: furniture catalog, style assistant, AR scene planner, and saved projects."
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct InitCli {
    /// Directory to initialize (defaults to the current working directory).
    #[clap(short, long)]
    dir: Option<PathBuf>,
    /// Remove the existing database file first (factory reset).
    #[clap(long)]
    force: bool,
}

#[derive(clap::Args, Debug)]
struct SchemaCli {
    /// Show a single subsystem's descriptor.
    subsystem: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize the studio store (idempotent; seeds catalog and profile).
    Init(InitCli),
    /// Browse the furniture catalog.
    Catalog(catalog::CatalogCli),
    /// Ask the design assistant for style recommendations.
    Assistant(assistant::AssistantCli),
    /// Draft and save AR furniture scenes.
    Scene(scene::SceneCli),
    /// Show the profile and manage saved projects.
    Profile(profile::ProfileCli),
    /// Print subsystem schema descriptors.
    Schema(SchemaCli),
    /// Print the version.
    Version,
}

/// Create the data directory and run every subsystem initializer.
/// Safe to call on every startup.
pub fn initialize_store(data_root: &Path) -> Result<(), error::DercorError> {
    fs::create_dir_all(data_root).map_err(error::DercorError::IoError)?;
    subsystems::initialize_all_dbs(data_root)
}

fn open_store(base: &Path, config: &StudioConfig) -> Result<Store, error::DercorError> {
    let data_root = config.data_root(base);
    initialize_store(&data_root)?;
    Ok(Store { root: data_root })
}

fn run_init(base: &Path, args: InitCli) -> Result<(), error::DercorError> {
    let target = match args.dir {
        Some(d) => d,
        None => base.to_path_buf(),
    };
    let config = StudioConfig::load(&target)?;
    let data_root = config.data_root(&target);
    let db_path = db::studio_db_path(&data_root);

    tui::render_box("DercoR8", "Diseña tu espacio soñado", tui::BoxStyle::Info);
    println!();

    if args.force && db_path.exists() {
        fs::remove_file(&db_path).map_err(error::DercorError::IoError)?;
        // WAL sidecars go with the main file.
        for suffix in ["-wal", "-shm"] {
            let sidecar = db_path.with_file_name(format!(
                "{}{}",
                db_path.file_name().unwrap_or_default().to_string_lossy(),
                suffix
            ));
            let _ = fs::remove_file(sidecar);
        }
        tui::status_line(tui::ItemStatus::Skipped, "base de datos", "eliminada");
    }

    let fresh = !db_path.exists();
    fs::create_dir_all(&data_root).map_err(error::DercorError::IoError)?;
    fs::create_dir_all(config.assets_root(&target)).map_err(error::DercorError::IoError)?;

    initialize_store(&data_root)?;
    let status = if fresh {
        tui::ItemStatus::Created
    } else {
        tui::ItemStatus::Unchanged
    };
    for sub in subsystems::SUBSYSTEMS {
        tui::status_line(status, sub.name, "");
    }

    println!();
    if fresh {
        tui::render_box(
            "Estudio Inicializado",
            &db_path.display().to_string(),
            tui::BoxStyle::Success,
        );
    } else {
        tui::render_box(
            "Estudio Ya Inicializado",
            "Esquema verificado",
            tui::BoxStyle::Warning,
        );
    }
    Ok(())
}

pub fn run() -> Result<(), error::DercorError> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Init(init_cli) => run_init(&current_dir, init_cli),
        Command::Schema(schema_cli) => {
            let mut schemas = std::collections::BTreeMap::new();
            schemas.insert("assistant", assistant::schema());
            schemas.insert("broker", broker::schema());
            schemas.insert("catalog", catalog::schema());
            schemas.insert("profile", profile::schema());
            schemas.insert("projects", projects::schema());
            schemas.insert("scene", scene::schema());

            let output = if let Some(sub) = schema_cli.subsystem {
                schemas
                    .get(sub.as_str())
                    .cloned()
                    .unwrap_or(serde_json::json!({ "error": "subsystem not found" }))
            } else {
                serde_json::json!({
                    "schema_version": "1.0.0",
                    "subsystems": schemas
                })
            };
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            Ok(())
        }
        Command::Catalog(catalog_cli) => {
            let config = StudioConfig::load(&current_dir)?;
            let store = open_store(&current_dir, &config)?;
            catalog::run_catalog_cli(&store, catalog_cli)
        }
        Command::Assistant(assistant_cli) => {
            let config = StudioConfig::load(&current_dir)?;
            let store = open_store(&current_dir, &config)?;
            assistant::run_assistant_cli(&store, assistant_cli)
        }
        Command::Scene(scene_cli) => {
            let config = StudioConfig::load(&current_dir)?;
            let store = open_store(&current_dir, &config)?;
            let assets = FsAssets::new(config.assets_root(&current_dir));
            scene::run_scene_cli(&store, &assets, scene_cli)
        }
        Command::Profile(profile_cli) => {
            let config = StudioConfig::load(&current_dir)?;
            let store = open_store(&current_dir, &config)?;
            profile::run_profile_cli(&store, profile_cli)
        }
    }
}
