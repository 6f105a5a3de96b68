//! # Seed Data Generator
//!
//! Populates the database with development data: a small product catalog and
//! a few registered customers.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p orderdesk-db --bin seed
//!
//! # Specify database path
//! cargo run -p orderdesk-db --bin seed -- --db ./data/orderdesk.db
//! ```
//!
//! ## Generated Data
//! - Every product in [`CATALOG`], with fixed SKUs, stock and prices, so
//!   order-placement demos behave the same on every machine
//! - Three registered customers
//!
//! Seeding is skipped when the database already holds products.

use std::env;

use orderdesk_core::{CustomerRegistration, Product};
use orderdesk_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Fixed development catalog: (id, name, brand, sku, stock, price in cents).
///
/// Product 9 ships sold out on purpose, so the out-of-stock path of order
/// placement can be demonstrated without editing rows first.
const CATALOG: &[(i64, &str, &str, &str, i64, i64)] = &[
    (1, "Espresso Beans 1kg", "Roastery", "BEAN-1KG", 40, 1899),
    (2, "Filter Roast 500g", "Roastery", "BEAN-F500", 55, 1150),
    (3, "Decaf Blend 500g", "Roastery", "BEAN-D500", 25, 1250),
    (4, "Moka Pot 6-cup", "Bialetti", "MOKA-6", 12, 3450),
    (5, "Moka Pot 3-cup", "Bialetti", "MOKA-3", 9, 2750),
    (6, "French Press 1L", "Bodum", "PRESS-1L", 14, 2990),
    (7, "Hand Grinder", "Hario", "GRIND-HND", 7, 4250),
    (8, "Gooseneck Kettle", "Hario", "KETL-GSN", 5, 5600),
    (9, "Ceramic Mug", "Atelier", "MUG-CER", 0, 1200),
    (10, "Travel Tumbler", "Atelier", "TMB-TRV", 30, 2150),
    (11, "Paper Filters x100", "Hario", "FILT-100", 120, 450),
    (12, "Cleaning Tablets", "Urnex", "CLEAN-TAB", 48, 990),
    (13, "Digital Scale", "Acaia", "SCALE-DGT", 4, 13900),
    (14, "Milk Pitcher 350ml", "Barista Co", "PTCH-350", 16, 1790),
    (15, "Cold Brew Bottle", "Hario", "COLD-BTL", 11, 3300),
];

/// Development customers registered on first seed.
fn customers() -> Vec<CustomerRegistration> {
    vec![
        CustomerRegistration {
            name: "Alice Martin".to_string(),
            date_of_birth: "1990-04-21".to_string(),
            email: "alice@example.com".to_string(),
            address: "12 Rue des Fleurs".to_string(),
            phone: "555-0100".to_string(),
        },
        CustomerRegistration {
            name: "Bob Osei".to_string(),
            date_of_birth: "1984-11-02".to_string(),
            email: "bob@example.com".to_string(),
            address: "7 Harbour Lane".to_string(),
            phone: "555-0101".to_string(),
        },
        CustomerRegistration {
            name: "Chiara Russo".to_string(),
            date_of_birth: "2001-06-15".to_string(),
            email: "chiara@example.com".to_string(),
            address: "Via Roma 3".to_string(),
            phone: "555-0102".to_string(),
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Library logs go through tracing; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./orderdesk_dev.db");

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
                println!("Order Desk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./orderdesk_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Order Desk Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database. A store we cannot reach at startup is fatal:
    // the error propagates and the process exits nonzero.
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    for &(id, name, brand, sku, stock, price_cents) in CATALOG {
        let product = Product {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            sku: sku.to_string(),
            stock,
            price_cents,
        };

        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.sku, e);
        }
    }

    println!("✓ Seeded {} products", db.products().count().await?);

    println!();
    println!("Registering customers...");

    for registration in customers() {
        let id = db.customers().register(&registration).await?;
        println!("  {} → customer {}", registration.name, id);
    }

    println!();
    println!("Verifying inventory view...");
    let report = db
        .products()
        .check_inventory(&orderdesk_db::ProductFilter::All)
        .await?;
    println!("  {}", report.message);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
