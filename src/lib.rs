// src/lib.rs

pub mod config;
pub mod line;
pub mod tracks;
pub mod types;

pub use line::{Fit, LineState};
pub use tracks::LineTracks;
pub use types::{Config, LinesConfig, LoggingConfig};
