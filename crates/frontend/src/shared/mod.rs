pub mod api_client;
pub mod api_utils;
pub mod app_config;
pub mod busy;
pub mod date_utils;
pub mod form;
pub mod page;
pub mod session;
pub mod storage;
