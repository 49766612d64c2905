use reqwest::Client;

use crate::{config, types::UserProfile};

/// Retrieves the current user's profile.
///
/// This is the first call every authenticated command makes: it verifies
/// that the stored token grants access to the user's data and yields the
/// user id required for playlist creation. A failure here means the session
/// has no valid identity and is treated as fatal by callers.
pub async fn get_current_user(token: &str) -> Result<UserProfile, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<UserProfile>().await
}
