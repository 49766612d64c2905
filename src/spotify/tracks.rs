use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{SearchResponse, TimeWindow, TopTracksResponse, TrackItem},
    warning,
};

/// Fixed cap on the number of top tracks fetched per window.
pub const TOP_TRACKS_LIMIT: u32 = 20;

/// Retrieves the user's top tracks for a listening window.
///
/// Calls the `/me/top/tracks` endpoint with the window's `time_range`
/// value. An empty item list is a valid result and is returned as an empty
/// vector, not an error.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `window` - Listening-history range to query
/// * `limit` - Maximum number of tracks to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<TrackItem>)` - Top tracks in ranking order
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP error
///
/// # Rate Limiting
///
/// 429 Too Many Requests responses are retried after the delay announced in
/// the `Retry-After` header, as long as it stays below 120 seconds; longer
/// delays produce a warning and the error is propagated. 502 Bad Gateway
/// responses are retried after a fixed 10-second delay.
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks(&token, TimeWindow::Short, TOP_TRACKS_LIMIT).await?;
/// println!("Fetched {} tracks", tracks.len());
/// ```
pub async fn get_top_tracks(
    token: &str,
    window: TimeWindow,
    limit: u32,
) -> Result<Vec<TrackItem>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/top/tracks?time_range={range}&limit={limit}",
        uri = &config::spotify_apiurl(),
        range = window.api_value(),
        limit = limit
    );

    loop {
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        // check for retry-after header
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                    retry_after
                );
            }
        }

        let response = match response.error_for_status() {
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
        };

        let res = response.json::<TopTracksResponse>().await?;

        return Ok(res.items);
    }
}

/// Searches for a track by free text and returns the URI of the best match.
///
/// Used while building playlists: each enriched row is looked up as
/// `"{track name} {artist}"` and the first hit's URI is collected. Returns
/// `Ok(None)` when the search yields no items.
pub async fn search_track(token: &str, query: &str) -> Result<Option<String>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "track"), ("limit", "1")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchResponse>().await?;

    Ok(res.tracks.items.into_iter().next().map(|t| t.uri))
}
