use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    enrich,
    management::TokenManager,
    spotify,
    types::{Dataset, TimeWindow, WindowedDatasets},
    warning,
};

/// Fetches and enriches the top tracks of one listening window.
///
/// Calls the top-tracks endpoint with the fixed cap and maps every returned
/// item through the enricher, preserving the API response order. Zero items
/// yield an empty dataset. A failed fetch is surfaced as a warning with the
/// error text preserved and also yields an empty dataset, so downstream
/// stages can proceed without crashing.
pub async fn fetch_window(token_mgr: &mut TokenManager, window: TimeWindow) -> Dataset {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching top tracks ({})...", window.label()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let token = token_mgr.get_valid_token().await;
    let items = match spotify::tracks::get_top_tracks(
        &token,
        window,
        spotify::tracks::TOP_TRACKS_LIMIT,
    )
    .await
    {
        Ok(items) => items,
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to fetch data: {}", e);
            return Dataset::empty(window);
        }
    };

    let total = items.len();
    let mut rows = Vec::with_capacity(total);

    for (idx, item) in items.iter().enumerate() {
        pb.set_message(format!(
            "Enriching track {current}/{total} ({label})...",
            current = idx + 1,
            total = total,
            label = window.label()
        ));

        let token = token_mgr.get_valid_token().await;
        rows.push(enrich::enrich_track(&token, item).await);
    }

    pb.finish_and_clear();

    Dataset::new(window, rows)
}

/// Loads the datasets of all three fixed windows plus the selected one.
///
/// Each fixed window is fetched exactly once. The selected window is
/// fetched one more time on its own rather than reusing one of the three
/// fixed datasets, so selection stays independent of the preloaded tables.
pub async fn load_all(token_mgr: &mut TokenManager, selected: TimeWindow) -> WindowedDatasets {
    let short = fetch_window(token_mgr, TimeWindow::Short).await;
    let medium = fetch_window(token_mgr, TimeWindow::Medium).await;
    let long = fetch_window(token_mgr, TimeWindow::Long).await;
    let selected = fetch_window(token_mgr, selected).await;

    WindowedDatasets {
        short,
        medium,
        long,
        selected,
    }
}
