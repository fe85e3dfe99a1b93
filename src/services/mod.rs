pub mod presenter;
pub mod stop_aggregator;
