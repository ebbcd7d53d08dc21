//! Terminal browser for a local ML learning hub: algorithm scripts,
//! tabular datasets, and notes documents.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod download;
pub mod execution;
pub mod metadata;
pub mod notebook;
pub mod printer;
pub mod render;
pub mod tui;
