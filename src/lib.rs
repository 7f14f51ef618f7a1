pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod scrapers;
pub mod store;

pub use config::{Args, ScoutConfig};
pub use error::{Result, ScoutError};
