//! # Ruya API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

use ruya_core::ports::InterpretationProvider;
use ruya_infra::{
    Argon2PasswordService, JwtTokenService, OpenRouterInterpreter, UnconfiguredInterpreter,
};

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

#[cfg(test)]
mod tests;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env()?;

    let db = ruya_infra::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    if config.auto_migrate {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        tracing::info!("Migrations applied");
    }

    let interpreter: Arc<dyn InterpretationProvider> = match config.openrouter.clone() {
        Some(openrouter) => Arc::new(
            OpenRouterInterpreter::new(openrouter)
                .context("failed to build interpretation client")?,
        ),
        None => {
            tracing::warn!("OPENROUTER_API_KEY not set. Interpretation requests will fail.");
            Arc::new(UnconfiguredInterpreter)
        }
    };

    let state = AppState::new(
        db,
        Arc::new(JwtTokenService::new(config.jwt.clone())),
        Arc::new(Argon2PasswordService::new()),
        interpreter,
    );

    tracing::info!(
        "Starting Ruya API Server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
