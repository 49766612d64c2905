//! # CLI Module
//!
//! This module provides the command-line interface layer for Tastecli, a
//! Spotify API client for analyzing a user's top tracks. It implements all
//! user-facing commands and coordinates the Spotify integration, the
//! enrichment pipeline, the dataset aggregation and the derived metrics.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth 2.0 PKCE authentication flow
//! - [`tracks`] - Fetch, enrich and display the top tracks of one window
//! - [`insights`] - Multi-window aggregation and derived listening metrics
//! - [`playlist`] - Create a private playlist from the selected window
//! - [`export`] - Write the enriched track table to a CSV file
//!
//! ## Data Flow
//!
//! Every analytical command follows the same one-directional pipeline:
//!
//! ```text
//! Spotify Web API → fetch (top tracks, cap 20)
//!                 → enrich (genre, language, country, derived fields)
//!                 → aggregate (per-window datasets)
//!                 → metrics (counts, means, diversity, clusters)
//!                 → terminal output (tables) / CSV
//! ```
//!
//! No stage feeds back into an earlier one, and nothing is persisted
//! between invocations except the OAuth token.
//!
//! ## Error Handling
//!
//! - A missing or unusable token is fatal: commands direct the user to
//!   `tastecli auth` and exit.
//! - A failed window fetch prints a warning and continues with an empty
//!   dataset; an empty *selected* dataset ends the command with
//!   `No data found.`
//! - Per-track enrichment failures are invisible here: they degrade to
//!   sentinel column values inside the pipeline.
//! - Sections with their own preconditions (clustering) print a warning
//!   and are skipped without affecting the rest of the output.

mod auth;
mod export;
mod insights;
mod playlist;
mod tracks;

pub use auth::auth;
pub use export::export;
pub use insights::{InsightSections, insights};
pub use playlist::playlist;
pub use tracks::tracks;
