use crate::render::RenderPlan;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Writes one plan as pretty-printed JSON to `<directory>/<name>.plan.json`.
#[instrument(skip(plan))]
pub async fn write_plan(directory: &str, name: &str, plan: &RenderPlan) -> Result<PathBuf, WriteError> {
    let json = serde_json::to_string_pretty(plan)?;

    fs::create_dir_all(directory).await?;
    let path = Path::new(directory).join(format!("{name}.plan.json"));
    fs::write(&path, json).await?;

    info!("🗺️ Wrote '{}'", path.to_string_lossy());
    Ok(path)
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::{Challenge, PathEntry};
    use crate::render::build_plan;
    use std::env::temp_dir;

    #[tokio::test]
    async fn writes_a_plan_that_round_trips_as_json() -> Result<(), WriteError> {
        let config = AppConfigBuilder::new().build();
        let challenge = Challenge {
            hash: None,
            path: vec![PathEntry {
                challengee: "hotspot".to_string(),
                challengee_lon: 4.899431,
                challengee_lat: 52.379189,
                receipt: None,
                witnesses: vec![],
            }],
        };
        let plan = build_plan(&challenge, false, &config).unwrap();

        let directory = temp_dir().join("waymark-plan-writer");
        let path = write_plan(directory.to_string_lossy().as_ref(), "challenge", &plan).await?;

        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("challenge.plan.json"));

        let written = fs::read_to_string(&path).await?;
        let value = serde_json::from_str::<serde_json::Value>(&written)?;
        assert!(value.get("viewport").is_some());
        assert_eq!(value["markers"].as_array().map(|m| m.len()), Some(1));
        assert_eq!(value["viewport"]["movingMethod"], "jumpTo");

        Ok(())
    }
}
