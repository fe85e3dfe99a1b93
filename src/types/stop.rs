use serde::Deserialize;

/// GTFS `location_type` codes. An empty field means a platform-level stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Option<u8>")]
pub enum LocationType {
    #[default]
    Stop,
    Station,
    EntranceExit,
    GenericNode,
    BoardingArea,
}

impl TryFrom<Option<u8>> for LocationType {
    type Error = String;

    fn try_from(code: Option<u8>) -> Result<Self, Self::Error> {
        match code {
            None | Some(0) => Ok(LocationType::Stop),
            Some(1) => Ok(LocationType::Station),
            Some(2) => Ok(LocationType::EntranceExit),
            Some(3) => Ok(LocationType::GenericNode),
            Some(4) => Ok(LocationType::BoardingArea),
            Some(other) => Err(format!("unknown location_type {}", other)),
        }
    }
}

/// One row of a GTFS `stops.txt` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stop {
    #[serde(rename = "stop_id")]
    pub id: String,
    #[serde(rename = "stop_name")]
    pub name: String,
    #[serde(rename = "stop_lat")]
    pub latitude: f64,
    #[serde(rename = "stop_lon")]
    pub longitude: f64,
    #[serde(rename = "location_type", default)]
    pub location_type: LocationType,
    #[serde(rename = "parent_station", default)]
    pub parent_station_id: Option<String>,
}

impl Stop {
    /// The id stops are grouped under: the parent station when there is one,
    /// otherwise the stop itself.
    pub fn resolve_id(&self) -> &str {
        match self.parent_station_id.as_deref() {
            Some(parent) if !parent.is_empty() => parent,
            _ => &self.id,
        }
    }
}

#[cfg(test)]
pub fn test_stop(id: &str, parent: Option<&str>) -> Stop {
    Stop {
        id: id.to_string(),
        name: format!("Stop {}", id),
        latitude: 40.0,
        longitude: -73.0,
        location_type: LocationType::Stop,
        parent_station_id: parent.map(|p| p.to_string()),
    }
}
