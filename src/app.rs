use std::io::{BufRead, Write};

use tracing::info;

use crate::{
    services::{presenter::render, stop_aggregator::aggregate},
    types::{app_config::AppConfig, feed_table::FeedTable},
    utils::{
        app_error::AppError, mta_client::MtaClient, route_prompt::choose_route,
        stop_table::load_stop_table,
    },
};

/// One full cycle: load stops, pick a line, fetch its feed, print its stations.
pub async fn run_app<R: BufRead, W: Write>(
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let stops = load_stop_table(&config.stops)?;
    let feeds = FeedTable::mta_subway(&config.feed_host);
    let mta_client = MtaClient::new(config.api_key.clone());

    let selection = choose_route(&feeds, config.route.as_deref(), input, output)?;
    info!("Selected line {}", selection.route);

    writeln!(output, "Stops of route {}:", selection.route)?;
    output.flush()?;

    let trip_updates = mta_client.fetch_trip_updates(selection.url).await?;

    // A feed can carry several routes; all are grouped, only the selected one is shown.
    let route_stops = aggregate(&trip_updates, &stops);

    for line in render(selection.route, route_stops.get(selection.route), &stops) {
        writeln!(output, "{}", line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::PathBuf};

    use tempfile::NamedTempFile;

    use crate::utils::mta_client::{encode_feed, trip_update};

    use super::*;

    const STOPS: &str = "stop_id,stop_name,stop_lat,stop_lon,location_type,parent_station\n\
        A02,Inwood-207 St,40.868072,-73.919899,1,\n\
        A02N,Inwood-207 St,40.868072,-73.919899,,A02\n\
        A02S,Inwood-207 St,40.868072,-73.919899,,A02\n\
        A03,Dyckman St,40.865491,-73.927271,1,\n\
        A03S,Dyckman St,40.865491,-73.927271,,A03\n";

    const ACE_PATH: &str = "/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-ace";

    fn stops_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn config(host: &str, stops: PathBuf, route: Option<&str>) -> AppConfig {
        AppConfig {
            api_key: "key".to_string(),
            stops,
            feed_host: host.to_string(),
            route: route.map(|r| r.to_string()),
        }
    }

    #[tokio::test]
    async fn reports_selected_route() {
        let mut mock_server = mockito::Server::new_async().await;
        let stops = stops_file(STOPS);

        let mock = mock_server
            .mock("GET", ACE_PATH)
            .match_header("x-api-key", "key")
            .with_body(encode_feed(vec![
                trip_update("A", &["A03S", "A02S", "H11S"]),
                trip_update("A", &["A02N"]),
                trip_update("E", &["E01N"]),
            ]))
            .create_async()
            .await;

        let config = config(&mock_server.url(), stops.path().to_path_buf(), None);
        let mut output = Vec::new();

        run_app(&config, &mut "a\n".as_bytes(), &mut output)
            .await
            .unwrap();

        mock.assert_async().await;

        let output = String::from_utf8(output).unwrap();
        let report = output
            .lines()
            .skip_while(|line| !line.starts_with("Stops of route"))
            .collect::<Vec<&str>>();

        assert_eq!(
            report,
            vec![
                "Stops of route A:",
                "- Inwood-207 St (A02): 40.868072, -73.919899",
                "- Dyckman St (A03): 40.865491, -73.927271",
                "- No name or location data for (H11S)",
            ]
        );
    }

    #[tokio::test]
    async fn route_without_data() {
        let mut mock_server = mockito::Server::new_async().await;
        let stops = stops_file(STOPS);

        let mock = mock_server
            .mock("GET", ACE_PATH)
            .with_body(encode_feed(vec![trip_update("A", &["A02N"])]))
            .create_async()
            .await;

        let config = config(&mock_server.url(), stops.path().to_path_buf(), Some("C"));
        let mut output = Vec::new();

        run_app(&config, &mut "".as_bytes(), &mut output)
            .await
            .unwrap();

        mock.assert_async().await;

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Stops of route C:\nNo real time data found for route C\n"
        );
    }

    #[tokio::test]
    async fn bad_stops_file_aborts_before_fetch() {
        let mut mock_server = mockito::Server::new_async().await;
        let stops = stops_file("stop_id,stop_name,stop_lat,stop_lon\nA02,Inwood-207 St,1.0,2.0\n");

        let mock = mock_server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let config = config(&mock_server.url(), stops.path().to_path_buf(), Some("A"));
        let mut output = Vec::new();

        let result = run_app(&config, &mut "".as_bytes(), &mut output).await;

        mock.assert_async().await;

        assert!(matches!(result, Err(AppError::DataFormat(_))));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let mut mock_server = mockito::Server::new_async().await;
        let stops = stops_file(STOPS);

        let mock = mock_server
            .mock("GET", ACE_PATH)
            .with_status(500)
            .create_async()
            .await;

        let config = config(&mock_server.url(), stops.path().to_path_buf(), Some("E"));
        let mut output = Vec::new();

        let result = run_app(&config, &mut "".as_bytes(), &mut output).await;

        mock.assert_async().await;

        assert!(matches!(result, Err(AppError::Fetch { .. })));
    }
}
