use std::collections::HashSet;

use crate::{
    enrich::UNKNOWN_GENRE,
    types::{EnrichedTrack, Explicitness},
};

/// Tracks below this popularity qualify as hidden gems.
pub const HIDDEN_GEM_MAX_POPULARITY: u32 = 40;

/// Groups rows by a key and counts them, descending by count.
///
/// Ties keep the order in which the key was first encountered; the sort is
/// stable and groups are created in row order.
pub fn frequency_count<K>(rows: &[EnrichedTrack], key: K) -> Vec<(String, usize)>
where
    K: Fn(&EnrichedTrack) -> &str,
{
    let mut counts: Vec<(String, usize)> = Vec::new();

    for row in rows {
        let k = key(row);
        match counts.iter_mut().find(|entry| entry.0 == k) {
            Some(entry) => entry.1 += 1,
            None => counts.push((k.to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Groups rows by a key and averages a numeric column, descending by mean.
pub fn group_mean<K, V>(rows: &[EnrichedTrack], key: K, value: V) -> Vec<(String, f64)>
where
    K: Fn(&EnrichedTrack) -> &str,
    V: Fn(&EnrichedTrack) -> f64,
{
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for row in rows {
        let k = key(row);
        let v = value(row);
        match groups.iter_mut().find(|entry| entry.0 == k) {
            Some(entry) => {
                entry.1 += v;
                entry.2 += 1;
            }
            None => groups.push((k.to_string(), v, 1)),
        }
    }

    let mut means: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(k, sum, n)| (k, sum / n as f64))
        .collect();

    means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    means
}

/// Computes the taste diversity score of a dataset.
///
/// The score is exactly
/// `2*(distinct genres) + 2*(distinct languages) + (distinct release years)
/// + (100 - mean popularity)`. It is deliberately not clamped: very narrow
/// or very popular listening can push it below zero, very eclectic
/// listening above 100. An empty dataset scores 0.
pub fn diversity_score(rows: &[EnrichedTrack]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }

    let genres: HashSet<&str> = rows.iter().map(|r| r.genre.as_str()).collect();
    let languages: HashSet<&str> = rows.iter().map(|r| r.language.as_str()).collect();
    let years: HashSet<&str> = rows.iter().map(|r| r.release_year.as_str()).collect();
    let mean_popularity =
        rows.iter().map(|r| r.popularity as f64).sum::<f64>() / rows.len() as f64;

    (genres.len() * 2 + languages.len() * 2 + years.len()) as f64 + (100.0 - mean_popularity)
}

/// Filters a dataset down to its hidden gems: tracks with popularity below
/// [`HIDDEN_GEM_MAX_POPULARITY`], clean lyrics, and a known genre.
pub fn hidden_gems(rows: &[EnrichedTrack]) -> Vec<&EnrichedTrack> {
    rows.iter()
        .filter(|r| {
            r.popularity < HIDDEN_GEM_MAX_POPULARITY
                && r.explicit == Explicitness::Clean
                && r.genre != UNKNOWN_GENRE
        })
        .collect()
}
