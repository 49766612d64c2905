use tabled::Table;

use crate::{
    error, info,
    insights::{cluster_tracks, diversity_score, frequency_count, group_mean, hidden_gems},
    management::{self, TokenManager},
    types::{
        ClusterTableRow, CountTableRow, Dataset, EnrichedTrack, Explicitness, MeanTableRow,
        TimeWindow,
    },
    warning,
};

/// Which insight sections to print. All `false` means "everything".
#[derive(Debug, Clone, Default)]
pub struct InsightSections {
    pub genres: bool,
    pub languages: bool,
    pub artists: bool,
    pub albums: bool,
    pub years: bool,
    pub explicit: bool,
    pub diversity: bool,
    pub clusters: bool,
    pub hidden_gems: bool,
    pub evolution: bool,
}

impl InsightSections {
    fn any(&self) -> bool {
        self.genres
            || self.languages
            || self.artists
            || self.albums
            || self.years
            || self.explicit
            || self.diversity
            || self.clusters
            || self.hidden_gems
            || self.evolution
    }
}

pub async fn insights(window: TimeWindow, sections: InsightSections) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run tastecli auth\n Error: {}",
                e
            );
        }
    };

    let datasets = management::load_all(&mut token_mgr, window).await;

    if datasets.selected.is_empty() {
        warning!("No data found.");
        return;
    }

    let rows = &datasets.selected.rows;
    let all = !sections.any();

    info!(
        "Listening insights for {label} ({count} tracks)",
        label = window.label(),
        count = rows.len()
    );

    if all || sections.diversity {
        let score = diversity_score(rows).trunc() as i64;
        info!("Your Diversity Score: {} / 100", score);
    }

    if all || sections.genres {
        print_count_table(
            "Genre Distribution",
            frequency_count(rows, |r| r.genre.as_str()),
        );

        let mut genre_popularity = group_mean(
            rows,
            |r| r.genre.as_str(),
            |r| r.popularity as f64,
        );
        genre_popularity.truncate(10);
        print_mean_table("Genres with Highest Popularity", genre_popularity);
    }

    if all || sections.languages {
        print_count_table(
            "Detected Song Languages",
            frequency_count(rows, |r| r.language.as_str()),
        );
    }

    if all || sections.artists {
        let mut artist_freq = frequency_count(rows, |r| r.artist.as_str());
        artist_freq.truncate(10);
        print_count_table("Most Frequent Artists", artist_freq);

        let mut artist_popularity = group_mean(
            rows,
            |r| r.artist.as_str(),
            |r| r.popularity as f64,
        );
        artist_popularity.truncate(10);
        print_mean_table("Top Artists by Average Popularity", artist_popularity);
    }

    if all || sections.albums {
        let mut album_counts = frequency_count(rows, |r| r.album.as_str());
        album_counts.truncate(10);
        print_count_table("Top Albums by Frequency", album_counts);
    }

    if all || sections.years {
        let mut release_counts = frequency_count(rows, |r| r.release_year.as_str());
        release_counts.sort_by(|a, b| a.0.cmp(&b.0));
        print_count_table("Release Year Distribution", release_counts);
    }

    if all || sections.explicit {
        print_count_table(
            "Explicit Content Breakdown",
            frequency_count(rows, |r| match r.explicit {
                Explicitness::Explicit => "Explicit",
                Explicitness::Clean => "Clean",
            }),
        );
    }

    if all || sections.clusters {
        print_clusters(rows);
    }

    if all || sections.hidden_gems {
        let gems = hidden_gems(rows);
        info!("Hidden Gems (Popularity < 40, Clean lyrics)");
        if gems.is_empty() {
            println!("No hidden gems in this window.");
        } else {
            println!("{}", Table::new(gems));
        }
    }

    if all || sections.evolution {
        info!("Listening Evolution by Genre");
        for dataset in [&datasets.short, &datasets.medium, &datasets.long] {
            print_window_genres(dataset);
        }
    }
}

fn print_count_table(title: &str, counts: Vec<(String, usize)>) {
    let table_rows: Vec<CountTableRow> = counts
        .into_iter()
        .map(|(name, count)| CountTableRow { name, count })
        .collect();

    info!("{}", title);
    println!("{}", Table::new(table_rows));
}

fn print_mean_table(title: &str, means: Vec<(String, f64)>) {
    let table_rows: Vec<MeanTableRow> = means
        .into_iter()
        .map(|(name, mean)| MeanTableRow {
            name,
            mean: format!("{:.2}", mean),
        })
        .collect();

    info!("{}", title);
    println!("{}", Table::new(table_rows));
}

fn print_clusters(rows: &[EnrichedTrack]) {
    info!("Track Similarity Clustering");

    let labels = match cluster_tracks(rows) {
        Ok(labels) => labels,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let table_rows: Vec<ClusterTableRow> = rows
        .iter()
        .zip(labels)
        .map(|(row, cluster)| ClusterTableRow {
            track: row.name.clone(),
            artist: row.artist.clone(),
            duration_min: row.duration_min,
            popularity: row.popularity,
            cluster,
        })
        .collect();

    println!("{}", Table::new(table_rows));
}

fn print_window_genres(dataset: &Dataset) {
    if dataset.is_empty() {
        warning!("No data for {}.", dataset.window.label());
        return;
    }

    print_count_table(
        dataset.window.label(),
        frequency_count(&dataset.rows, |r| r.genre.as_str()),
    );
}
