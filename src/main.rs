mod config;
mod dictionary;
mod game;
mod models;
mod stdio;

use anyhow::{Context, Result};
use config::Config;
use dictionary::WordList;
use game::GameEngine;
use tokio::io::{self, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries game snapshots
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unscramble_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Unscramble game engine...");

    // Load configuration
    let config = Config::from_env()?;
    let settings = config.game_settings()?;
    tracing::info!("Configuration loaded");

    // Load word list
    let words = match &config.words.path {
        Some(path) => match WordList::load(path).await {
            Ok(words) => words,
            Err(e) => {
                tracing::warn!(
                    "Failed to load word list from {}: {}. Using builtin words.",
                    path,
                    e
                );
                WordList::builtin()
            }
        },
        None => WordList::builtin(),
    };

    let mut engine = match config.game.seed {
        Some(seed) => GameEngine::with_seed(words, settings, seed),
        None => GameEngine::new(words, settings),
    }
    .context("Failed to start game")?;

    let settings = engine.settings();
    tracing::info!(
        "Game ready: {} rounds, {} points per correct guess",
        settings.max_rounds,
        settings.score_increase
    );

    stdio::run(&mut engine, BufReader::new(io::stdin()), io::stdout()).await?;

    Ok(())
}
