#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use expense_lib::config::Config;
use expense_lib::AppState;

const SERVICE_NAME: &str = "expense-server";

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    let tracing_guard = tracing::subscriber::set_default(subscriber);
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "Loading config file");
            Config::from_file(config_path)?
        }
        None => {
            info!("No config file found, reading config from environment");
            Config::from_env()?
        }
    };

    let telemetry_layer = match &config.honeycomb_api_key {
        Some(api_key) => Some(expense_lib::tracing::create_opentelemetry_layer(
            SERVICE_NAME,
            api_key,
        )?),
        None => None,
    };

    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default())
        .with(telemetry_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    drop(tracing_guard);

    let transaction_repo = expense_repo::sqlx_repo::create_repo(
        &config.database_url,
        config.max_connections,
        config.acquire_timeout(),
    )
    .await?;

    let state = AppState::from_config(transaction_repo, config.extensions)?;
    info!(
        dashboard = config.extensions.dashboard,
        pie_chart = config.extensions.pie_chart,
        "Extensions configured"
    );

    info!(bind_address = %config.bind_address, "Starting server");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func(state.clone()))
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await?;

    Ok(())
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
