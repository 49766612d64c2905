use crate::{
    enrich::{country, language},
    spotify,
    types::{EnrichedTrack, Explicitness, TrackItem},
    utils,
};

/// Sentinel used when the artist lookup yields no genres.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Enriches one raw track record into an [`EnrichedTrack`] row.
///
/// Resolution steps, in order:
/// 1. Genre: first genre of the primary artist's metadata, unresolved on
///    any lookup failure.
/// 2. Language: detected over `"{track name} {artist name}"`.
/// 3. Country: resolved from the primary artist's biography.
/// 4. Derived fields computed directly from the raw record.
///
/// A failed sub-step degrades that single field to its sentinel value; the
/// row itself is always produced.
pub async fn enrich_track(token: &str, item: &TrackItem) -> EnrichedTrack {
    let primary = item.artists.first();
    let artist_name = primary.map(|a| a.name.clone()).unwrap_or_default();

    let genre = match primary {
        Some(artist) => match spotify::artists::get_artist(token, &artist.id).await {
            Ok(detail) => detail.genres.into_iter().next(),
            Err(_) => None,
        },
        None => None,
    };

    let lang_input = format!("{} {}", item.name, artist_name);
    let lang = language::detect_language(&lang_input);
    let origin = country::resolve_country(&artist_name).await;

    from_parts(item, genre, lang, origin)
}

/// Builds the row from a raw record and pre-resolved enrichment parts.
///
/// `None` for the genre marks it unresolved and maps to [`UNKNOWN_GENRE`].
/// The derived fields never fail: duration is converted to minutes with two
/// decimals, the explicit flag maps to `Explicit`/`Clean`, and the release
/// year is the first four characters of the album release date.
pub fn from_parts(
    item: &TrackItem,
    genre: Option<String>,
    language: String,
    country: String,
) -> EnrichedTrack {
    EnrichedTrack {
        name: item.name.clone(),
        artist: item
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        album: item.album.name.clone(),
        genre: genre.unwrap_or_else(|| UNKNOWN_GENRE.to_string()),
        language,
        duration_min: utils::round2(item.duration_ms as f64 / 60_000.0),
        popularity: item.popularity,
        explicit: Explicitness::from(item.explicit),
        release_year: item.album.release_date.chars().take(4).collect(),
        country,
    }
}
