use std::{collections::HashMap, io, path::Path};

use tracing::{debug, info};

use crate::types::stop::{LocationType, Stop};

use super::app_error::AppError;

pub type StopTable = HashMap<String, Stop>;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "stop_id",
    "stop_name",
    "stop_lat",
    "stop_lon",
    "location_type",
    "parent_station",
];

pub fn load_stop_table(path: &Path) -> Result<StopTable, AppError> {
    info!("Loading stops from {}", path.display());

    let reader = csv::Reader::from_path(path).map_err(|e| {
        AppError::DataFormat(format!("Failed to open {}: {}", path.display(), e))
    })?;

    read_stop_table(reader)
}

/// Later rows overwrite earlier rows with the same stop id.
pub fn read_stop_table<R: io::Read>(mut reader: csv::Reader<R>) -> Result<StopTable, AppError> {
    let headers = reader
        .headers()
        .map_err(|e| AppError::DataFormat(format!("Failed to read header row: {}", e)))?
        .clone();

    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .copied()
        .collect::<Vec<&str>>();

    if !missing.is_empty() {
        return Err(AppError::DataFormat(format!(
            "Missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut stops = StopTable::new();

    for result in reader.deserialize::<Stop>() {
        let stop = result.map_err(|e| AppError::DataFormat(e.to_string()))?;
        stops.insert(stop.id.clone(), stop);
    }

    debug!(
        "Loaded {} stops, {} of them stations",
        stops.len(),
        stops
            .values()
            .filter(|stop| stop.location_type == LocationType::Station)
            .count()
    );

    Ok(stops)
}
