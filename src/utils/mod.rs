pub mod app_error;
pub mod mta_client;
pub mod route_prompt;
pub mod stop_table;
