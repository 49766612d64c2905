use tabled::Table;

use crate::{
    error,
    management::{self, TokenManager},
    types::TimeWindow,
    warning,
};

pub async fn tracks(window: TimeWindow) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run tastecli auth\n Error: {}",
                e
            );
        }
    };

    let dataset = management::fetch_window(&mut token_mgr, window).await;

    if dataset.is_empty() {
        warning!("No data found.");
        return;
    }

    let table = Table::new(&dataset.rows);
    println!(
        "Top Tracks ({label})\n{table}",
        label = window.label(),
        table = table
    );
}
