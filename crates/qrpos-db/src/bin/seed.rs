//! # Seed Data Writer
//!
//! Writes the admin fixture snapshot (three products, three orders) into a
//! database file so the dashboard starts with data.
//!
//! ## Usage
//! ```bash
//! # Seed ./qrpos_dev.db under the default key
//! cargo run -p qrpos-db --bin seed
//!
//! # Specify database path and key
//! cargo run -p qrpos-db --bin seed -- --db ./data/qrpos.db --key store
//!
//! # Overwrite an existing snapshot
//! cargo run -p qrpos-db --bin seed -- --force
//! ```

use std::env;

use qrpos_core::{fixtures, DEFAULT_STORAGE_KEY};
use qrpos_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./qrpos_dev.db");
    let mut key = String::from(DEFAULT_STORAGE_KEY);
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--key" | "-k" => {
                if i + 1 < args.len() {
                    key = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("QR POS Seed Data Writer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./qrpos_dev.db)");
                println!("  -k, --key <KEY>    Storage key (default: {})", DEFAULT_STORAGE_KEY);
                println!("  -f, --force        Overwrite an existing snapshot");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    println!("🌱 QR POS Seed Data Writer");
    println!("==========================");
    println!("Database: {}", db_path);
    println!("Key:      {}", key);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let repo = db.snapshots();
    if repo.contains(&key).await? && !force {
        println!("⚠ A snapshot already exists under '{}'", key);
        println!("  Skipping seed. Pass --force to overwrite.");
        db.close().await;
        return Ok(());
    }

    let snapshot = fixtures::mock_snapshot();
    repo.save(&key, &snapshot).await?;

    println!(
        "✓ Wrote {} products and {} orders",
        snapshot.products.len(),
        snapshot.orders.len()
    );

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
