//! Terminal front end for the token sell simulator
//!
//! Wraps `tokensim_core` with a ratatui UI (parameter panel, results table,
//! scatter chart), CSV export, a YAML startup config, and file logging.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod export;
pub mod headless;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use logging::init_logging;
