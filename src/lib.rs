pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod fetcher;
pub mod models;
