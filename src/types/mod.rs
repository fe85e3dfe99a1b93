pub mod app_config;
pub mod feed_table;
pub mod stop;
pub mod trip_update_record;
