use crate::{
    error,
    management::{self, TokenManager},
    success,
    types::TimeWindow,
    warning,
};

pub async fn export(window: TimeWindow, output: String) {
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

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &dataset.rows {
        if let Err(e) = writer.serialize(row) {
            error!("Failed to serialize track row: {}", e);
        }
    }

    let data = match writer.into_inner() {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to finish CSV output: {}", e);
        }
    };

    if let Err(e) = async_fs::write(&output, data).await {
        error!("Failed to write {}: {}", output, e);
    }

    success!("Exported {} tracks to {}.", dataset.len(), output);
}
