pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod panel;
pub mod ui;
