use std::collections::BTreeMap;

use thiserror::Error;
use urlencoding::encode;

pub const DEFAULT_FEED_HOST: &str = "https://api-endpoint.mta.info";

/// Subway feeds and the routes each one carries.
const MTA_SUBWAY_FEEDS: &[(&str, &[&str])] = &[
    ("nyct/gtfs-ace", &["A", "C", "E"]),
    ("nyct/gtfs-bdfm", &["B", "D", "F", "M"]),
    ("nyct/gtfs-g", &["G"]),
    ("nyct/gtfs-jz", &["J", "Z"]),
    ("nyct/gtfs-nqrw", &["N", "Q", "R", "W"]),
    ("nyct/gtfs-l", &["L"]),
    ("nyct/gtfs", &["1", "2", "3", "4", "5", "6"]),
    ("nyct/gtfs-7", &["7"]),
    ("nyct/gtfs-si", &["SI"]),
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown line {0:?}")]
pub struct InvalidSelectionError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSelection<'a> {
    pub route: &'a str,
    pub url: &'a str,
}

/// Route id to real-time feed URL. Built once at startup.
#[derive(Debug, Clone)]
pub struct FeedTable {
    feeds: BTreeMap<String, String>,
}

impl FeedTable {
    pub fn mta_subway(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        let feeds = MTA_SUBWAY_FEEDS
            .iter()
            .flat_map(|(feed, routes)| {
                let url = format!("{}/Dataservice/mtagtfsfeeds/{}", host, encode(feed));
                routes
                    .iter()
                    .map(move |route| (route.to_string(), url.clone()))
            })
            .collect();

        FeedTable { feeds }
    }

    /// Known route ids in ascending order.
    pub fn routes(&self) -> Vec<&str> {
        self.feeds.keys().map(String::as_str).collect()
    }

    pub fn select(&self, input: &str) -> Result<FeedSelection<'_>, InvalidSelectionError> {
        let wanted = input.trim();

        self.feeds
            .iter()
            .find(|(route, _)| route.eq_ignore_ascii_case(wanted))
            .map(|(route, url)| FeedSelection { route, url })
            .ok_or_else(|| InvalidSelectionError(wanted.to_string()))
    }
}
