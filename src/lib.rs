//! # ttrack - TrackingTime CLI
//!
//! A command-line client for the TrackingTime web service: start and stop
//! time-tracked tasks, show the currently active one, and sync elapsed time.
//!
//! ## Features
//!
//! - **Active Task Lookup**: Show the task currently being tracked for the configured user
//! - **Tracking Control**: Start and stop tracking for a task by id
//! - **Time Sync**: Ask the server to recompute and persist elapsed tracked time
//! - **Interactive Setup**: Guided configuration of credentials and user id
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ttrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
