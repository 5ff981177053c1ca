// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, storage, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use config::{Config, StorageKind};
use db::Stores;
use dotenv::dotenv;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.clone()
        } else {
            "info,actix_web=info,sqlx=warn".to_string()
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting mapalbum-api...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize storage
    let stores = match config.storage_kind() {
        Some(StorageKind::Memory) => {
            log::info!("Using in-memory storage");
            Stores::memory()
        }
        _ => match config::init_db_pool(&config).await {
            Ok(pool) => Stores::postgres(pool),
            Err(e) => {
                log::error!("Failed to connect to database: {}", e);
                std::process::exit(1);
            }
        },
    };

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            // Middleware
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            // Stores and routes
            .configure(|cfg| handlers::routes(cfg, &stores))
    })
    .bind(&server_addr)?
    .run()
    .await
}
