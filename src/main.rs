use crate::app_config::AppConfig;
use crate::path_loader::load_challenges_from;
use tracing::{info, warn};

mod app_config;
mod domain;
mod geocell;
mod path_loader;
mod plan_writer;
mod render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let challenges = load_challenges_from(config.paths().directory(), "json").await?;
    info!("✅  Loaded {} challenges", challenges.len());

    let show_witnesses = config.render().show_witnesses();
    let mut written = 0;
    for loaded in &challenges {
        match render::build_plan(&loaded.challenge, show_witnesses, &config) {
            Ok(plan) => {
                plan_writer::write_plan(config.output().directory(), &loaded.name, &plan).await?;
                written += 1;
            }
            Err(err) => warn!("⚠️ Skipping '{}': {}", loaded.name, err),
        }
    }

    info!("🔥 {} is done, {} of {} plans written", env!("CARGO_PKG_NAME"), written, challenges.len());

    Ok(())
}
