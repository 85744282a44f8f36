// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod download;
pub mod file;
pub mod net;
pub mod params;
pub mod progress;
pub mod runner;
pub mod scrape;
