use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::ArtistDetail};

/// Retrieves metadata for a single artist from the Spotify Web API.
///
/// Fetches the artist object by id, which carries the genre list used
/// during enrichment. Handles transient 502 Bad Gateway responses with an
/// automatic retry after a 10-second delay; other errors are propagated
/// immediately.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Spotify ID of the artist to look up
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(ArtistDetail)` - Artist metadata including the genre list
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP error
///
/// # Example
///
/// ```
/// let artist = get_artist(&token, "4NHQUGzhtTLFvgF5SZesLK").await?;
/// let genre = artist.genres.first();
/// ```
pub async fn get_artist(token: &str, artist_id: &str) -> Result<ArtistDetail, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/artists/{id}",
            uri = &config::spotify_apiurl(),
            id = artist_id
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<ArtistDetail>().await?;

        return Ok(res);
    }
}
