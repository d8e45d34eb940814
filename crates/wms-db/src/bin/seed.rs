//! # Seed Data Generator
//!
//! Populates the database with a small, consistent warehouse for
//! development and manual API testing.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p wms-db --bin seed
//!
//! # Specify database path and how many products to create
//! cargo run -p wms-db --bin seed -- --db ./data/wms.db --products 40
//! ```
//!
//! ## Generated Data
//! - One country, one province and three localities
//! - Sellers and carriers spread over the localities
//! - Two warehouses with one section per product type
//! - Products with a batch and two price records each
//! - Employees, buyers and a handful of inbound/purchase orders

use chrono::{Duration, Utc};
use std::env;
use wms_core::{
    Buyer, Carry, Country, Employee, InboundOrder, Locality, Product, ProductBatch,
    ProductRecord, ProductType, Province, PurchaseOrder, Section, Seller, Warehouse,
};
use wms_db::{Database, DbConfig};

const LOCALITIES: &[(i64, &str)] = &[(6700, "Lujan"), (1900, "La Plata"), (7600, "Mar del Plata")];

const PRODUCT_TYPES: &[&str] = &["Frozen", "Chilled", "Dry goods"];

const PRODUCT_NAMES: &[&str] = &[
    "Green peas",
    "Spinach",
    "Ice cream",
    "Hake fillet",
    "Yogurt",
    "Butter",
    "Cheddar",
    "Rice",
    "Flour",
    "Lentils",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut product_count: usize = 20;
    let mut db_path = String::from("./wms_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--products" | "-p" => {
                if i + 1 < args.len() {
                    product_count = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Warehouse API Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --products <N>  Number of products to generate (default: 20)");
                println!("  -d, --db <PATH>     Database file path (default: ./wms_dev.db)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Warehouse API Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!("Products: {}", product_count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if db.countries().count().await? > 0 {
        println!("⚠ Database already has data");
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();

    // Geography
    let country = db
        .countries()
        .insert(&Country {
            id: 0,
            country_name: "Argentina".to_string(),
        })
        .await?;
    let province = db
        .provinces()
        .insert(&Province {
            id: 0,
            province_name: "Buenos Aires".to_string(),
            country_id: country.id,
        })
        .await?;
    for (id, name) in LOCALITIES {
        db.localities()
            .insert(&Locality {
                id: *id,
                locality_name: name.to_string(),
                province_id: province.id,
            })
            .await?;
    }
    println!("✓ {} localities", LOCALITIES.len());

    // Partners
    let mut sellers = Vec::new();
    for (idx, (locality_id, name)) in LOCALITIES.iter().enumerate() {
        let seller = db
            .sellers()
            .insert(&Seller {
                id: 0,
                cid: 1000 + idx as i64,
                company_name: format!("Distribuidora {}", name),
                address: format!("Calle {} 100", idx + 1),
                telephone: format!("0221-555-{:04}", idx),
                locality_id: *locality_id,
            })
            .await?;
        sellers.push(seller);

        db.carries()
            .insert(&Carry {
                id: 0,
                cid: format!("CAR-{:03}", idx + 1),
                company_name: format!("Transportes {}", name),
                address: format!("Ruta {} km 10", idx + 2),
                telephone: format!("0221-666-{:04}", idx),
                locality_id: *locality_id,
            })
            .await?;
    }
    println!("✓ {} sellers and carriers", sellers.len());

    // Storage
    let mut product_types = Vec::new();
    for description in PRODUCT_TYPES {
        product_types.push(
            db.product_types()
                .insert(&ProductType {
                    id: 0,
                    description: description.to_string(),
                })
                .await?,
        );
    }

    let mut warehouses = Vec::new();
    for (idx, (locality_id, _)) in LOCALITIES.iter().take(2).enumerate() {
        warehouses.push(
            db.warehouses()
                .insert(&Warehouse {
                    id: 0,
                    warehouse_code: format!("WH-{:02}", idx + 1),
                    address: format!("Parque Industrial lote {}", idx + 1),
                    telephone: format!("0221-777-{:04}", idx),
                    locality_id: *locality_id,
                    minimum_capacity: 100,
                    minimum_temperature: -20.0,
                })
                .await?,
        );
    }

    let mut sections = Vec::new();
    for (w_idx, warehouse) in warehouses.iter().enumerate() {
        for (t_idx, product_type) in product_types.iter().enumerate() {
            sections.push(
                db.sections()
                    .insert(&Section {
                        id: 0,
                        section_number: (w_idx * 100 + t_idx + 1) as i64,
                        current_temperature: -10.0 + 5.0 * t_idx as f64,
                        minimum_temperature: -20.0,
                        current_capacity: 50,
                        minimum_capacity: 10,
                        maximum_capacity: 500,
                        warehouse_id: warehouse.id,
                        product_type_id: product_type.id,
                    })
                    .await?,
            );
        }
    }
    println!("✓ {} warehouses, {} sections", warehouses.len(), sections.len());

    let mut employees = Vec::new();
    for (idx, warehouse) in warehouses.iter().enumerate() {
        employees.push(
            db.employees()
                .insert(&Employee {
                    id: 0,
                    card_number_id: format!("EMP-{:04}", idx + 1),
                    first_name: ["Lucia", "Martin"][idx % 2].to_string(),
                    last_name: ["Gomez", "Fernandez"][idx % 2].to_string(),
                    warehouse_id: warehouse.id,
                })
                .await?,
        );
    }

    let buyer = db
        .buyers()
        .insert(&Buyer {
            id: 0,
            card_number_id: "BUY-0001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
        })
        .await?;

    // Products, batches, records, orders
    let today = Utc::now().date_naive();
    let mut generated = 0;

    for seed in 0..product_count {
        let name = PRODUCT_NAMES[seed % PRODUCT_NAMES.len()];
        let type_idx = seed % product_types.len();
        let section = &sections[seed % sections.len()];

        let product = match db
            .products()
            .insert(&Product {
                id: 0,
                product_code: format!("PRD-{:04}", seed + 1),
                description: name.to_string(),
                width: 10.0 + (seed % 5) as f64,
                height: 5.0 + (seed % 3) as f64,
                length: 20.0,
                net_weight: 0.5 + (seed % 4) as f64 * 0.25,
                expiration_rate: 0.7,
                recommended_freezing_temperature: -18.0,
                freezing_rate: 1.3,
                product_type_id: product_types[type_idx].id,
                seller_id: sellers[seed % sellers.len()].id,
            })
            .await
        {
            Ok(product) => product,
            Err(e) => {
                eprintln!("Failed to insert product {}: {}", seed + 1, e);
                continue;
            }
        };

        let batch = db
            .product_batches()
            .insert(&ProductBatch {
                id: 0,
                batch_number: 5000 + seed as i64,
                current_quantity: 20 + (seed % 30) as i64,
                initial_quantity: 60,
                current_temperature: section.current_temperature,
                minimum_temperature: section.minimum_temperature,
                due_date: (today + Duration::days(90)).format(DATE_FORMAT).to_string(),
                manufacturing_date: (today - Duration::days(10)).format(DATE_FORMAT).to_string(),
                manufacturing_hour: (seed % 24) as i64,
                product_id: product.id,
                section_id: section.id,
            })
            .await?;

        let mut last_record = None;
        for days_ago in [30, 0] {
            last_record = Some(
                db.product_records()
                    .insert(&ProductRecord {
                        id: 0,
                        last_update_date: (today - Duration::days(days_ago))
                            .format(DATE_FORMAT)
                            .to_string(),
                        purchase_price: 100.0 + seed as f64,
                        sale_price: 150.0 + seed as f64,
                        product_id: product.id,
                    })
                    .await?,
            );
        }

        let employee = &employees[seed % employees.len()];
        db.inbound_orders()
            .insert(&InboundOrder {
                id: 0,
                order_date: today.format(DATE_FORMAT).to_string(),
                order_number: format!("IN-{:05}", seed + 1),
                employee_id: employee.id,
                product_batch_id: batch.id,
                warehouse_id: employee.warehouse_id,
            })
            .await?;

        if let (Some(record), true) = (last_record, seed % 3 == 0) {
            db.purchase_orders()
                .insert(&PurchaseOrder {
                    id: 0,
                    order_number: format!("PO-{:05}", seed + 1),
                    order_date: today.format(DATE_FORMAT).to_string(),
                    tracking_code: format!("TRK{:06}", seed * 7919 % 1_000_000),
                    buyer_id: buyer.id,
                    product_record_id: record.id,
                })
                .await?;
        }

        generated += 1;
    }

    let elapsed = start.elapsed();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    // Verify reports
    println!();
    println!("Verifying reports...");
    let stock = db.product_batches().report_by_section(None).await?;
    let units: i64 = stock.iter().map(|row| row.products_count).sum();
    println!("  Sections: {} ({} units in stock)", stock.len(), units);

    let orders = db.purchase_orders().report_by_buyer(Some(buyer.id)).await?;
    if let Some(row) = orders.first() {
        println!("  Buyer {}: {} purchase orders", row.card_number_id, row.purchase_orders_count);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
