// src/lib.rs

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod input;
pub mod key_handlers;
pub mod logging;
pub mod message_list;
pub mod models;
pub mod ui;
pub mod widget;

pub use app::App;
