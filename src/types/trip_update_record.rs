#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimeUpdateRecord {
    pub stop_id: String,
}

/// The parts of a GTFS-Realtime trip update needed to group stops by route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripUpdateRecord {
    pub route_id: String,
    pub stop_time_updates: Vec<StopTimeUpdateRecord>,
}

impl From<gtfs_realtime::TripUpdate> for TripUpdateRecord {
    fn from(trip_update: gtfs_realtime::TripUpdate) -> Self {
        TripUpdateRecord {
            route_id: trip_update.trip.route_id.unwrap_or_default(),
            stop_time_updates: trip_update
                .stop_time_update
                .into_iter()
                .filter_map(|stu| stu.stop_id)
                .map(|stop_id| StopTimeUpdateRecord { stop_id })
                .collect(),
        }
    }
}

#[cfg(test)]
pub fn test_record(route_id: &str, stop_ids: &[&str]) -> TripUpdateRecord {
    TripUpdateRecord {
        route_id: route_id.to_string(),
        stop_time_updates: stop_ids
            .iter()
            .map(|id| StopTimeUpdateRecord {
                stop_id: id.to_string(),
            })
            .collect(),
    }
}
