//! Shortlist — a small web service on top of the Spotify Web API.
//!
//! Shortlist authenticates a user through the authorization-code OAuth flow,
//! walks their playlists and saved tracks, filters tracks by duration and
//! builds new playlists from the short ones. Every use case is exposed as a
//! JSON endpoint plus one HTML page listing the user's playlists.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the endpoints
//! - `config` - Configuration management and environment variables
//! - `duration` - Duration filter and aggregate statistics
//! - `error` - Service error type and HTTP mapping
//! - `pagination` - Cursor-driven page accumulation
//! - `server` - Router setup and listener
//! - `session` - In-memory browser session store
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod config;
pub mod duration;
pub mod error;
pub mod pagination;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Session created for {}", user_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1 after printing. Only used for unrecoverable
/// startup errors; request handlers report failures through
/// [`error::ApiError`](crate::error::ApiError) instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Spotify request failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
