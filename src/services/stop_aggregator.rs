use std::collections::{HashMap, HashSet};

use crate::{types::trip_update_record::TripUpdateRecord, utils::stop_table::StopTable};

/// Route id to the stations its trips are currently scheduled to call at.
pub type RouteStopIndex = HashMap<String, HashSet<String>>;

/// Groups the stops of every trip update by route, collapsing platforms into
/// their parent station. Stop ids missing from `stops` are kept as they are.
///
/// A route only gets an entry once one of its trips has a stop, so a missing
/// key means the feed had no data for that route.
pub fn aggregate(records: &[TripUpdateRecord], stops: &StopTable) -> RouteStopIndex {
    let mut index = RouteStopIndex::new();

    for record in records {
        for update in &record.stop_time_updates {
            let stop_id = stops
                .get(&update.stop_id)
                .map(|stop| stop.resolve_id())
                .unwrap_or(update.stop_id.as_str());

            index
                .entry(record.route_id.clone())
                .or_default()
                .insert(stop_id.to_string());
        }
    }

    index
}
