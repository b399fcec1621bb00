//! Seed data loading

use std::path::Path;
use tracing::info;
use validator::Validate;
use crate::error::{AppError, Result};
use crate::models::NewProvider;

const DEFAULT_SEED: &str = include_str!("../data/providers.json");

/// The provider list compiled into the binary.
pub fn default_seed() -> Result<Vec<NewProvider>> {
    parse_seed(DEFAULT_SEED)
}

/// Parse and shape-check a JSON array of provider records.
pub fn parse_seed(json: &str) -> Result<Vec<NewProvider>> {
    let records: Vec<NewProvider> = serde_json::from_str(json)
        .map_err(|e| AppError::Seed(format!("invalid seed JSON: {}", e)))?;

    for (index, record) in records.iter().enumerate() {
        record.validate()
            .map_err(|e| AppError::Seed(format!("record {} ({}): {}", index, record.name, e)))?;
    }

    Ok(records)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<NewProvider>> {
    info!("Loading provider seed file: {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    parse_seed(&contents)
}

/// Seed list selected by configuration; an empty path means the built-in list.
pub fn load_configured_seed(file: &str) -> Result<Vec<NewProvider>> {
    if file.trim().is_empty() {
        info!("Using built-in provider seed");
        default_seed()
    } else {
        load_seed_file(Path::new(file))
    }
}
