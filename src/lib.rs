//! NBA Team Stats Library
//!
//! This library fetches NBA team statistics from the NBA stats API with a
//! fixed-delay retry policy and renders them as an HTML table. It also
//! serves a team directory backed by TheSportsDB.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hoopstats::config::Config;
//! use hoopstats::error::AppError;
//! use hoopstats::server::{AppState, StatsPage, build_stats_page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let state = AppState::from_config(Config::load().await?)?;
//!
//!     match build_stats_page(&state).await {
//!         StatsPage::Table(html) => println!("{html}"),
//!         StatsPage::Unavailable(reason) => eprintln!("no data: {reason:?}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod presentation;
pub mod server;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{FetchResult, StatsFetcher, TeamProfile, TeamStatRecord};
pub use error::AppError;
pub use presentation::{TeamRow, project};
pub use server::{AppState, router};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
