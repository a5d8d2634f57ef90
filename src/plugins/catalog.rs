use crate::core::broker::DbBroker;
use crate::core::db;
use crate::core::error;
use crate::core::output;
use crate::core::schemas;
use crate::core::store::Store;
use clap::{Parser, Subcommand, ValueEnum};
use rusqlite::params;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One purchasable furniture entry. Rows are seeded once and never
/// updated or deleted afterwards.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub stock: i64,
}

struct SeedItem {
    name: &'static str,
    category: &'static str,
    price: f64,
    image: &'static str,
    description: &'static str,
    stock: i64,
}

// The fixed showroom inventory. Seeded only into an empty table so user
// data files keep whatever they already contain.
const SEED_ITEMS: &[SeedItem] = &[
    SeedItem {
        name: "Sofá Moderno",
        category: "Sofá",
        price: 4500.00,
        image: "assets/sofa.png",
        description: "Sofá contemporáneo con diseño ergonómico. Material: Cuero sintético. Dimensiones: 200x90x80cm",
        stock: 10,
    },
    SeedItem {
        name: "Mesa de Centro",
        category: "Mesa",
        price: 3200.00,
        image: "assets/mesa.png",
        description: "Mesa de centro con diseño minimalista. Material: Madera de roble. Dimensiones: 120x60x45cm",
        stock: 8,
    },
    SeedItem {
        name: "Lámpara de Pie",
        category: "Lámpara",
        price: 1200.00,
        image: "assets/lampara.png",
        description: "Lámpara de pie con estilo moderno. Material: Metal y tela. Altura: 160cm",
        stock: 15,
    },
    SeedItem {
        name: "Silla de Oficina",
        category: "Silla",
        price: 2500.00,
        image: "assets/silla.png",
        description: "Silla ergonómica para oficina. Material: Malla transpirable",
        stock: 12,
    },
    SeedItem {
        name: "Estantería",
        category: "Estantería",
        price: 4200.00,
        image: "assets/estanteria.png",
        description: "Estantería modular de diseño moderno. Material: MDF y metal",
        stock: 5,
    },
    SeedItem {
        name: "Cama King Size",
        category: "Cama",
        price: 6800.00,
        image: "assets/cama.png",
        description: "Cama king size con cabecero tapizado. Material: Madera y tela",
        stock: 6,
    },
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(name = "catalog", about = "Browse the furniture catalog.")]
pub struct CatalogCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List every catalog item.
    List,
}

pub fn initialize_catalog_db(root: &Path) -> Result<(), error::DercorError> {
    let broker = DbBroker::new(root);
    let db_path = db::studio_db_path(root);

    broker.with_conn(&db_path, "dercor", "catalog.init", |conn| {
        conn.execute(schemas::STUDIO_DB_SCHEMA_PRODUCTOS, [])?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM productos", [], |row| row.get(0))?;
        if count == 0 {
            for item in SEED_ITEMS {
                conn.execute(
                    "INSERT INTO productos (nombre, categoria, precio, imagen, descripcion, stock)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        item.name,
                        item.category,
                        item.price,
                        item.image,
                        item.description,
                        item.stock
                    ],
                )?;
            }
        }
        Ok(())
    })
}

/// All catalog rows in insertion order.
pub fn list_items(store: &Store) -> Result<Vec<CatalogItem>, error::DercorError> {
    let broker = DbBroker::new(&store.root);
    let db_path = db::studio_db_path(&store.root);

    broker.with_conn(&db_path, "dercor", "catalog.list", |conn| {
        let mut stmt = conn.prepare(
            "SELECT id, nombre, categoria, precio, imagen, descripcion, stock
             FROM productos ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CatalogItem {
                id: row.get(0)?,
                name: row.get(1)?,
                category: row.get(2)?,
                price: row.get(3)?,
                image: row.get(4)?,
                description: row.get(5)?,
                stock: row.get(6)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}

pub fn run_catalog_cli(store: &Store, cli: CatalogCli) -> Result<(), error::DercorError> {
    match cli.command {
        CatalogCommand::List => {
            let items = list_items(store)?;
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&items).unwrap());
                }
                OutputFormat::Text => {
                    use colored::Colorize;
                    for item in &items {
                        println!(
                            "{}  {}",
                            item.name.bright_white().bold(),
                            format!("[{}]", item.category).bright_black()
                        );
                        println!("  Precio: {}", format!("${:.2}", item.price).yellow());
                        let stock_line = format!("Stock: {} unidades", item.stock);
                        if item.stock > 0 {
                            println!("  {}", stock_line.bright_black());
                        } else {
                            println!("  {}", stock_line.bright_red());
                        }
                        println!("  {}", output::compact_line(&item.description, 50));
                        println!();
                    }
                }
            }
        }
    }
    Ok(())
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "catalog",
        "version": "0.1.0",
        "description": "Seeded furniture catalog (read-only after seeding)",
        "commands": [
            { "name": "list", "description": "List every catalog item" }
        ],
        "storage": ["productos"]
    })
}
