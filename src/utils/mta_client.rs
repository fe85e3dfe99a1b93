use chrono::DateTime;
use gtfs_realtime::FeedMessage;
use prost::Message;
use tracing::{debug, info};

use crate::types::trip_update_record::TripUpdateRecord;

use super::app_error::AppError;

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct MtaClient {
    api_key: String,
    client: reqwest::Client,
}

impl MtaClient {
    pub fn new(api_key: String) -> Self {
        let request_client = reqwest::Client::new();

        MtaClient {
            api_key,
            client: request_client,
        }
    }

    /// Fetches one GTFS-Realtime feed and keeps only its trip updates.
    pub async fn fetch_trip_updates(&self, url: &str) -> Result<Vec<TripUpdateRecord>, AppError> {
        info!("Fetching real-time feed {}", url);

        let body = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| AppError::fetch(url, e))?
            .bytes()
            .await
            .map_err(|e| AppError::fetch(url, e))?;

        let feed = FeedMessage::decode(body).map_err(|e| AppError::decode(url, e))?;

        if let Some(generated_at) = feed
            .header
            .timestamp
            .and_then(|ts| DateTime::from_timestamp(ts as i64, 0))
        {
            debug!("Feed generated at {}", generated_at);
        }

        let entity_count = feed.entity.len();
        let records = feed
            .entity
            .into_iter()
            .filter_map(|entity| entity.trip_update)
            .map(TripUpdateRecord::from)
            .collect::<Vec<TripUpdateRecord>>();

        debug!(
            "Feed has {} entities, {} trip updates",
            entity_count,
            records.len()
        );

        Ok(records)
    }
}

#[cfg(test)]
pub fn encode_feed(trip_updates: Vec<gtfs_realtime::TripUpdate>) -> Vec<u8> {
    let mut entity = trip_updates
        .into_iter()
        .enumerate()
        .map(|(i, trip_update)| gtfs_realtime::FeedEntity {
            id: format!("trip-{}", i),
            trip_update: Some(trip_update),
            ..Default::default()
        })
        .collect::<Vec<gtfs_realtime::FeedEntity>>();

    entity.push(gtfs_realtime::FeedEntity {
        id: "vehicle-only".to_string(),
        vehicle: Some(gtfs_realtime::VehiclePosition::default()),
        ..Default::default()
    });

    gtfs_realtime::FeedMessage {
        header: gtfs_realtime::FeedHeader {
            gtfs_realtime_version: "1.0".to_string(),
            timestamp: Some(1_700_000_000),
            ..Default::default()
        },
        entity,
    }
    .encode_to_vec()
}

#[cfg(test)]
pub fn trip_update(route_id: &str, stop_ids: &[&str]) -> gtfs_realtime::TripUpdate {
    gtfs_realtime::TripUpdate {
        trip: gtfs_realtime::TripDescriptor {
            route_id: Some(route_id.to_string()),
            ..Default::default()
        },
        stop_time_update: stop_ids
            .iter()
            .map(|id| gtfs_realtime::trip_update::StopTimeUpdate {
                stop_id: Some(id.to_string()),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}
