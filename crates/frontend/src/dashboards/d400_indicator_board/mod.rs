pub mod api;
pub mod board;
pub mod config_select;
pub mod ui;
