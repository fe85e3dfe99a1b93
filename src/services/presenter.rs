use std::collections::HashSet;

use crate::utils::stop_table::StopTable;

/// Report lines for one route, stops sorted by id. `None` means the feed had
/// nothing for the route.
pub fn render(route_id: &str, stop_ids: Option<&HashSet<String>>, stops: &StopTable) -> Vec<String> {
    let stop_ids = match stop_ids {
        Some(stop_ids) => stop_ids,
        None => return vec![format!("No real time data found for route {}", route_id)],
    };

    let mut sorted = stop_ids.iter().collect::<Vec<&String>>();
    sorted.sort();

    sorted
        .into_iter()
        .map(|stop_id| match stops.get(stop_id) {
            Some(stop) => format!(
                "- {} ({}): {}, {}",
                stop.name, stop_id, stop.latitude, stop.longitude
            ),
            None => format!("- No name or location data for ({})", stop_id),
        })
        .collect()
}
