use crate::core::broker::DbBroker;
use crate::core::db;
use crate::core::error;
use crate::core::output;
use crate::core::schemas;
use crate::core::store::{Session, Store};
use crate::core::time;
use crate::core::tui;
use crate::plugins::projects::{self, ProjectKind};
use clap::{Parser, Subcommand};
use rusqlite::{OptionalExtension, params};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default profile seeded into an empty store on first run.
pub const DEFAULT_USERNAME: &str = "Usuario";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub registered_at: String,
}

#[derive(Parser, Debug)]
#[clap(name = "profile", about = "Manage the user profile and saved projects.")]
pub struct ProfileCli {
    /// Act as this user (defaults to the first profile in the store).
    #[clap(long, global = true)]
    user: Option<String>,
    #[clap(subcommand)]
    command: ProfileCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the active profile.
    Show,
    /// Rename the active user.
    Rename {
        #[clap(long)]
        to: String,
    },
    /// List the user's saved projects.
    Projects {
        /// Filter by project kind.
        #[clap(long, value_enum)]
        kind: Option<ProjectKind>,
    },
    /// Delete one saved project by id.
    Delete {
        #[clap(long)]
        id: i64,
    },
    /// Delete every saved project of the user.
    Clear,
}

pub fn initialize_users_db(root: &Path) -> Result<(), error::DercorError> {
    let broker = DbBroker::new(root);
    let db_path = db::studio_db_path(root);

    broker.with_conn(&db_path, "dercor", "profile.init", |conn| {
        conn.execute(schemas::STUDIO_DB_SCHEMA_USUARIOS, [])?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM usuarios", [], |row| row.get(0))?;
        if count == 0 {
            conn.execute(
                "INSERT INTO usuarios (username, fecha_registro) VALUES (?1, ?2)",
                params![DEFAULT_USERNAME, time::now_stamp()],
            )?;
        }
        Ok(())
    })
}

/// Exact-match lookup. Absence is `None`, not an error.
pub fn get_user(store: &Store, username: &str) -> Result<Option<User>, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "profile.get", |conn| {
        let user = conn
            .query_row(
                "SELECT id, username, fecha_registro FROM usuarios WHERE username = ?1",
                params![username],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        registered_at: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(error::DercorError::RusqliteError)?;
        Ok(user)
    })
}

/// The startup profile: the lowest-id row, which on a fresh store is the
/// seeded default user.
pub fn first_user(store: &Store) -> Result<Option<User>, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "profile.first", |conn| {
        let user = conn
            .query_row(
                "SELECT id, username, fecha_registro FROM usuarios ORDER BY id LIMIT 1",
                [],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        registered_at: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(error::DercorError::RusqliteError)?;
        Ok(user)
    })
}

/// Rename a user. Returns whether a row was affected. Renaming to the
/// current name is a no-op, and a rename that collides with an existing
/// username is reported as an unaffected no-op rather than an error (the
/// UNIQUE column keeps duplicates out of the table).
pub fn rename_user(store: &Store, old: &str, new: &str) -> Result<bool, error::DercorError> {
    if old == new {
        return Ok(false);
    }

    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "profile.rename", |conn| {
        let res = conn.execute(
            "UPDATE usuarios SET username = ?1 WHERE username = ?2",
            params![new, old],
        );
        match res {
            Ok(affected) => Ok(affected > 0),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Ok(false)
            }
            Err(e) => Err(error::DercorError::RusqliteError(e)),
        }
    })
}

pub fn run_profile_cli(store: &Store, cli: ProfileCli) -> Result<(), error::DercorError> {
    use colored::Colorize;

    let session = Session::resolve(store, cli.user.as_deref())?;
    match cli.command {
        ProfileCommand::Show => {
            println!("{}", session.user.username.bright_white().bold());
            println!(
                "  Registrado: {}",
                time::date_part(&session.user.registered_at).bright_black()
            );
            let count = projects::list_projects(store, session.user.id, None)?.len();
            println!("  Proyectos guardados: {}", count);
        }
        ProfileCommand::Rename { to } => {
            let to = to.trim();
            if to.is_empty() {
                tui::render_box("Nombre inválido", "", tui::BoxStyle::Warning);
                return Ok(());
            }
            if rename_user(store, &session.user.username, to)? {
                tui::render_box(
                    "Perfil Actualizado",
                    "Nombre de usuario actualizado",
                    tui::BoxStyle::Success,
                );
            } else {
                tui::render_box(
                    "Sin cambios",
                    "El nombre ya está en uso o es el actual",
                    tui::BoxStyle::Warning,
                );
            }
        }
        ProfileCommand::Projects { kind } => {
            let items = projects::list_projects(store, session.user.id, kind)?;
            if items.is_empty() {
                println!("No hay proyectos guardados");
                return Ok(());
            }
            for p in &items {
                println!(
                    "{}  {} ({})  {}",
                    format!("#{}", p.id).bright_black(),
                    p.name.bright_white(),
                    p.kind,
                    time::date_part(&p.created_at).bright_black()
                );
                println!("    {}", output::compact_line(&p.payload, 80).bright_black());
            }
        }
        ProfileCommand::Delete { id } => {
            if projects::delete_project(store, id)? {
                tui::render_box("Proyecto Eliminado", "", tui::BoxStyle::Success);
            } else {
                tui::render_box("Sin Proyectos", "No existe ese proyecto", tui::BoxStyle::Warning);
            }
        }
        ProfileCommand::Clear => {
            let removed = projects::delete_all_for_user(store, session.user.id)?;
            if removed > 0 {
                tui::render_box(
                    "Proyectos Eliminados",
                    "Todos los proyectos han sido eliminados",
                    tui::BoxStyle::Success,
                );
            } else {
                tui::render_box(
                    "Sin Proyectos",
                    "No hay proyectos para eliminar",
                    tui::BoxStyle::Warning,
                );
            }
        }
    }
    Ok(())
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "profile",
        "version": "0.1.0",
        "description": "User profiles with rename and project history",
        "commands": [
            { "name": "show" },
            { "name": "rename", "parameters": ["to"] },
            { "name": "projects", "parameters": ["kind"] },
            { "name": "delete", "parameters": ["id"] },
            { "name": "clear" }
        ],
        "storage": ["usuarios"]
    })
}
