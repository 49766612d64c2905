use crate::lastfm;

/// Sentinel returned when no country can be resolved for an artist.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Scans a biography text for the first country name it contains.
///
/// Matching is case-insensitive substring search against the canonical
/// country list, `rust_iso3166::ALL` — the ISO 3166-1 table in ascending
/// alpha-2 code order. When the text mentions several countries the winner
/// is the first one in *table order*, not the first by position in the
/// text; the table order is stable across runs, which keeps resolution
/// reproducible.
pub fn match_country(bio: &str) -> Option<String> {
    if bio.is_empty() {
        return None;
    }

    let haystack = bio.to_lowercase();
    rust_iso3166::ALL
        .iter()
        .find(|country| haystack.contains(&country.name.to_lowercase()))
        .map(|country| country.name.to_string())
}

/// Resolves an artist's country of origin from their Last.fm biography.
///
/// Fetches the free-text biography and returns the first country name found
/// in it per [`match_country`]. Any failure — network error, malformed
/// response, missing biography, no match — degrades to [`UNKNOWN_COUNTRY`];
/// this function never propagates an error. Repeated calls for the same
/// artist re-issue the fetch; results are not cached.
pub async fn resolve_country(artist_name: &str) -> String {
    match lastfm::get_artist_bio(artist_name).await {
        Ok(bio) => match_country(&bio).unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
        Err(_) => UNKNOWN_COUNTRY.to_string(),
    }
}
