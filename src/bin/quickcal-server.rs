// ABOUTME: Server binary for the QuickCal nutrition API
// ABOUTME: Loads configuration, connects the database, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! # QuickCal API Server Binary
//!
//! Starts the QuickCal nutrition API with user authentication, meal and mood
//! tracking, recommendations, coaching, and the chat assistant.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use quickcal_server::{
    auth::AuthManager, config::ServerConfig, database::Database, logging,
    resources::ServerResources, server::HttpServer,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "quickcal-server")]
#[command(about = "QuickCal nutrition API server")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting QuickCal API server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database.url);

    #[allow(clippy::cast_possible_wrap)]
    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes().to_vec(),
        config.auth.jwt_expiry_hours as i64,
    );

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config),
    ));

    HttpServer::new(resources).run(port).await
}
