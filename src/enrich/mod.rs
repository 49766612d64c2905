//! # Enrichment Module
//!
//! This module turns raw Spotify track records into analysis-ready rows. It
//! implements the per-track enrichment pipeline: language detection over the
//! track and artist names, country resolution from the artist's Last.fm
//! biography, genre resolution from the artist's Spotify metadata, and the
//! derived numeric/text fields (duration in minutes, explicit flag mapping,
//! four-digit release year).
//!
//! ## Components
//!
//! - [`language`] - Deterministic language detection with an `"unknown"`
//!   sentinel for undetectable input
//! - [`country`] - Biography fetch plus case-insensitive matching against
//!   the canonical ISO 3166-1 country table, `"Unknown"` on any failure
//! - [`track`] - Combines the resolvers with the raw record into one
//!   [`EnrichedTrack`](crate::types::EnrichedTrack)
//!
//! ## Failure Semantics
//!
//! Every resolution sub-step is independently fault-tolerant: a failed
//! lookup degrades that single field to its sentinel value and never aborts
//! the row or the batch. Sub-steps signal "unresolved" with `Option` rather
//! than errors; the enricher composes them without any exception-style
//! control flow. Enrichment therefore never drops or adds rows: a batch of
//! `n` raw tracks always yields exactly `n` enriched rows, in API response
//! order.
//!
//! ## Determinism
//!
//! Language detection carries no randomness, and country matching iterates
//! the country table in a fixed, documented order, so repeated runs over the
//! same inputs produce identical rows. Country resolution re-issues its
//! network fetch on every call; there is deliberately no lookup cache.

pub mod country;
pub mod language;
pub mod track;

pub use country::{UNKNOWN_COUNTRY, match_country, resolve_country};
pub use language::{UNKNOWN_LANGUAGE, detect_language};
pub use track::{UNKNOWN_GENRE, enrich_track, from_parts};
