//! # Seed Data Generator
//!
//! Populates the database with sample warung products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p kasir-db --bin seed
//!
//! # Specify database path
//! cargo run -p kasir-db --bin seed -- --db ./data/kasir.db
//! ```
//!
//! Seeds a handful of categories (Makanan, Minuman, Snack) and shelf
//! staples with realistic rupiah prices and stock levels. Skips seeding
//! when products already exist so it is safe to run repeatedly.

use std::env;

use kasir_db::{Database, DbConfig};

/// Categories: (name, description)
const CATEGORIES: &[(&str, &str)] = &[
    ("Makanan", "Makanan berat dan mie instan"),
    ("Minuman", "Minuman dingin dan panas"),
    ("Snack", "Cemilan dan gorengan"),
];

/// Products: (name, price, stock)
const PRODUCTS: &[(&str, i64, i64)] = &[
    ("Indomie Goreng", 3500, 50),
    ("Indomie Soto", 3200, 40),
    ("Nasi Uduk", 8000, 20),
    ("Kopi Susu", 5000, 30),
    ("Es Teh Manis", 3000, 60),
    ("Teh Botol", 4000, 48),
    ("Air Mineral 600ml", 3000, 72),
    ("Gorengan Tempe", 2000, 35),
    ("Keripik Singkong", 6000, 25),
    ("Roti Bakar", 7000, 15),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./kasir_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kasir POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./kasir_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Kasir POS Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding categories...");
    for (name, description) in CATEGORIES {
        let category = db.categories().insert(None, name, Some(description)).await?;
        println!("  + {} ({})", category.name, category.id);
    }

    println!();
    println!("Seeding products...");
    for (name, price, stock) in PRODUCTS {
        let product = db.products().insert(name, *price, *stock).await?;
        println!(
            "  + #{} {} (Rp{} x {})",
            product.id, product.name, product.price, product.stock
        );
    }

    println!();
    println!(
        "✓ Seed complete: {} categories, {} products",
        CATEGORIES.len(),
        PRODUCTS.len()
    );

    Ok(())
}
