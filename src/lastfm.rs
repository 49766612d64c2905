//! Last.fm biography source.
//!
//! Single-operation client for the `artist.getinfo` endpoint, used by the
//! country resolver. Response types are private since Last.fm nests its
//! JSON awkwardly; absent fields degrade to an empty biography rather than
//! a deserialization error.

use reqwest::Client;
use serde::Deserialize;

use crate::config;

#[derive(Debug, Deserialize)]
struct ArtistInfoResponse {
    #[serde(default)]
    artist: Option<ArtistInfo>,
}

#[derive(Debug, Deserialize)]
struct ArtistInfo {
    #[serde(default)]
    bio: Option<ArtistBio>,
}

#[derive(Debug, Deserialize)]
struct ArtistBio {
    #[serde(default)]
    content: String,
}

/// Fetches the free-text biography for an artist by name.
///
/// Returns the biography content, or an empty string when the response
/// carries no biography. Network and HTTP errors are propagated to the
/// caller, which is expected to degrade them to its own sentinel.
pub async fn get_artist_bio(artist_name: &str) -> Result<String, reqwest::Error> {
    let api_key = config::lastfm_api_key();

    let client = Client::new();
    let response = client
        .get(&config::lastfm_apiurl())
        .query(&[
            ("method", "artist.getinfo"),
            ("artist", artist_name),
            ("api_key", api_key.as_str()),
            ("format", "json"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<ArtistInfoResponse>().await?;

    Ok(json
        .artist
        .and_then(|artist| artist.bio)
        .map(|bio| bio.content)
        .unwrap_or_default())
}
