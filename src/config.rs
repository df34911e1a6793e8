use chrono::NaiveDate;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub schema_file: PathBuf,
    pub data_folder: PathBuf,
    pub cert_folder: PathBuf,
    pub catalogue_file: Option<PathBuf>,
    pub issue_date: Option<NaiveDate>,
    pub name_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        dotenvy::dotenv().ok();

        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let schema_file = base_dir.join(
            std::env::var("SCHEMA_FILE").unwrap_or_else(|_| "schema/base_schema.json".to_string()),
        );
        let data_folder =
            base_dir.join(std::env::var("DATA_FOLDER").unwrap_or_else(|_| "data".to_string()));
        let cert_folder = base_dir
            .join(std::env::var("CERT_FOLDER").unwrap_or_else(|_| "certificates".to_string()));

        let catalogue_file = std::env::var("CATALOGUE_FILE")
            .ok()
            .map(|p| base_dir.join(p));

        let issue_date = match std::env::var("ISSUE_DATE") {
            Ok(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|e| format!("ISSUE_DATE must be YYYY-MM-DD: {}", e))?,
            ),
            Err(_) => None,
        };

        let name_seed = match std::env::var("NAME_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| format!("NAME_SEED must be an integer: {}", e))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            schema_file,
            data_folder,
            cert_folder,
            catalogue_file,
            issue_date,
            name_seed,
        })
    }
}
