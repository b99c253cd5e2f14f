mod bot;
mod config;
mod data;
mod error;
mod service;
mod startup;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    info!("Starting soundboard bot");

    let client = bot::start::init_bot(&config, db).await?;

    bot::start::start_bot(client).await
}
