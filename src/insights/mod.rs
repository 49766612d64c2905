//! # Insights Module
//!
//! Derived metrics over enriched track tables. Everything in here is a pure
//! function of one dataset (or several, for cross-window comparisons): no
//! network calls, no shared state, deterministic output for a given input.
//!
//! ## Metrics
//!
//! - [`frequency_count`](metrics::frequency_count) - group by a column and
//!   count rows, descending by count; ties keep first-encountered order
//! - [`group_mean`](metrics::group_mean) - group by a column and average a
//!   numeric column, descending by mean
//! - [`diversity_score`](metrics::diversity_score) - composite variety
//!   score over genres, languages, release years and mean popularity
//! - [`hidden_gems`](metrics::hidden_gems) - low-popularity, clean tracks
//!   with a known genre
//! - [`cluster_tracks`](cluster::cluster_tracks) - seeded k-means over
//!   standardized duration and popularity
//!
//! Clustering is the one metric with a precondition: fewer rows than
//! clusters is a boundary error, reported as a descriptive message so the
//! caller can skip just that section.

pub mod cluster;
pub mod metrics;

pub use cluster::{CLUSTER_COUNT, CLUSTER_SEED, cluster_tracks};
pub use metrics::{
    HIDDEN_GEM_MAX_POPULARITY, diversity_score, frequency_count, group_mean, hidden_gems,
};
