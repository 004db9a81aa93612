// src/lib.rs

#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod csv;
pub mod data;
pub mod file;
pub mod html;
pub mod progress;
pub mod runner;

pub use data::Record;
