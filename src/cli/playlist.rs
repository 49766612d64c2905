use crate::{
    error, info,
    management::{self, SessionState, TokenManager},
    spotify, success,
    types::TimeWindow,
    warning,
};

pub async fn playlist(window: TimeWindow, session: &mut SessionState) {
    if session.playlist_created {
        match &session.playlist_url {
            Some(url) => info!("Playlist already created this session: {}", url),
            None => info!("Playlist already created this session."),
        }
        return;
    }

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run tastecli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let user = match spotify::user::get_current_user(&token).await {
        Ok(user) => user,
        Err(e) => {
            error!("Authentication failed: {}", e);
        }
    };

    let dataset = management::fetch_window(&mut token_mgr, window).await;

    if dataset.is_empty() {
        warning!("No data found.");
        return;
    }

    let playlist_name = "My Favorite Tracks".to_string();

    let playlist_exists = match spotify::playlist::exists(&playlist_name).await {
        Ok(exists) => exists,
        Err(e) => {
            warning!("Failed to check if playlist exists: {}", e);
            false
        }
    };

    if playlist_exists {
        info!("Playlist {} already exists", playlist_name);
        return;
    }

    info!("Looking up URIs for {} tracks...", dataset.len());

    let mut track_uris: Vec<String> = Vec::new();
    for row in &dataset.rows {
        let token = token_mgr.get_valid_token().await;
        let query = format!("{} {}", row.name, row.artist);

        match spotify::tracks::search_track(&token, &query).await {
            Ok(Some(uri)) => track_uris.push(uri),
            Ok(None) => warning!("No search result for {}", query),
            Err(e) => warning!("Failed to search track {}: {}", query, e),
        }
    }

    if track_uris.is_empty() {
        warning!("No track URIs found, playlist not created.");
        return;
    }

    let created = match spotify::playlist::create(&user.id, playlist_name).await {
        Ok(resp) => resp,
        Err(e) => {
            warning!("Failed to create playlist: {}", e);
            return;
        }
    };

    success!("Playlist {} created.", created.name);

    for chunk in track_uris.chunks(100) {
        match spotify::playlist::add_tracks(created.id.clone(), chunk.to_vec()).await {
            Ok(_) => success!("Added {} tracks to playlist.", chunk.len()),
            Err(e) => warning!("Failed to add tracks to playlist: {}", e),
        }
    }

    session.mark_playlist_created(created.external_urls.spotify.clone());

    if !created.external_urls.spotify.is_empty() {
        info!("Playlist available at {}", created.external_urls.spotify);
    }
}
