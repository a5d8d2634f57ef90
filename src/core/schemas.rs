//! Centralized database schema definitions for the studio store.
//!
//! Dercor keeps all durable state in one consolidated SQLite file with
//! three tables:
//! 1. productos: the seeded furniture catalog (immutable after seeding).
//! 2. usuarios: user profiles (one default row guaranteed after first run).
//! 3. proyectos: saved projects, both style proposals and AR scenes.
//!
//! Table and column names are the on-disk contract with existing
//! `dercor8.db` files and must not be renamed.

pub const STUDIO_DB_NAME: &str = "dercor8.db";
pub const EVENTS_LOG_NAME: &str = "dercor.events.jsonl";
pub const SCENE_DRAFT_NAME: &str = "scene.draft.json";

pub const STUDIO_DB_SCHEMA_PRODUCTOS: &str = "
    CREATE TABLE IF NOT EXISTS productos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        categoria TEXT,
        precio REAL,
        imagen TEXT,
        descripcion TEXT,
        stock INTEGER DEFAULT 1
    )
";

pub const STUDIO_DB_SCHEMA_USUARIOS: &str = "
    CREATE TABLE IF NOT EXISTS usuarios (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE,
        fecha_registro TEXT
    )
";

pub const STUDIO_DB_SCHEMA_PROYECTOS: &str = "
    CREATE TABLE IF NOT EXISTS proyectos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER,
        nombre TEXT,
        tipo TEXT,
        datos TEXT,
        fecha TEXT
    )
";

pub const STUDIO_DB_SCHEMA_INDEX_PROYECTOS_USER: &str =
    "CREATE INDEX IF NOT EXISTS idx_proyectos_user ON proyectos(user_id)";
