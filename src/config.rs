use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub trips_output_path: PathBuf,
    pub rejects_output_path: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let trips_output_path = env::var("TRIPS_OUTPUT_PATH")
            .unwrap_or_else(|_| "trips.geojson".to_string())
            .into();
        let rejects_output_path = env::var("REJECTS_OUTPUT_PATH")
            .unwrap_or_else(|_| "rejects.log".to_string())
            .into();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            trips_output_path,
            rejects_output_path,
            log_level,
        })
    }
}
