use reqwest::Client;

use crate::{
    config, error,
    management::TokenManager,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        GetUserPlaylistsResponse,
    },
};

/// Checks whether the user already owns a playlist with the given name.
///
/// Scans the first page of the user's playlists. Used as a server-side
/// duplicate guard in addition to the in-process session state.
pub async fn exists(name: &str) -> Result<bool, reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run tastecli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let api_url = format!(
        "{uri}/me/playlists?limit=50",
        uri = &config::spotify_apiurl()
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<GetUserPlaylistsResponse>().await?;

    Ok(res.items.iter().any(|p| p.name == name))
}

/// Creates a private playlist for the given user.
pub async fn create(user_id: &str, name: String) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run tastecli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = user_id
    );

    let request = CreatePlaylistRequest {
        name,
        description: "Auto-generated from your Tastecli listening insights".to_string(),
        public: false,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds tracks to a playlist by URI.
///
/// The endpoint accepts at most 100 URIs per request; callers chunk larger
/// lists.
pub async fn add_tracks(
    playlist_id: String,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run tastecli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let api_url = format!(
        "{uri}/playlists/{playlist}/tracks",
        uri = &config::spotify_apiurl(),
        playlist = playlist_id
    );

    let request = AddTracksRequest { uris };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksResponse>().await
}
