use tastecli::insights::{
    CLUSTER_COUNT, cluster_tracks, diversity_score, frequency_count, group_mean, hidden_gems,
};
use tastecli::types::{EnrichedTrack, Explicitness};

// Helper function to create an enriched row with the fields the metrics use
fn create_test_row(
    name: &str,
    artist: &str,
    genre: &str,
    language: &str,
    duration_min: f64,
    popularity: u32,
    explicit: Explicitness,
    release_year: &str,
) -> EnrichedTrack {
    EnrichedTrack {
        name: name.to_string(),
        artist: artist.to_string(),
        album: format!("{} LP", artist),
        genre: genre.to_string(),
        language: language.to_string(),
        duration_min,
        popularity,
        explicit,
        release_year: release_year.to_string(),
        country: "Unknown".to_string(),
    }
}

#[test]
fn test_frequency_count_descending() {
    let rows = vec![
        create_test_row("a", "X", "pop", "eng", 3.0, 50, Explicitness::Clean, "2020"),
        create_test_row("b", "X", "rock", "eng", 3.0, 50, Explicitness::Clean, "2020"),
        create_test_row("c", "X", "pop", "eng", 3.0, 50, Explicitness::Clean, "2020"),
        create_test_row("d", "X", "pop", "eng", 3.0, 50, Explicitness::Clean, "2020"),
        create_test_row("e", "X", "rock", "eng", 3.0, 50, Explicitness::Clean, "2020"),
        create_test_row("f", "X", "jazz", "eng", 3.0, 50, Explicitness::Clean, "2020"),
    ];

    let counts = frequency_count(&rows, |r| r.genre.as_str());

    assert_eq!(counts.len(), 3);
    assert_eq!(counts[0], ("pop".to_string(), 3));
    assert_eq!(counts[1], ("rock".to_string(), 2));
    assert_eq!(counts[2], ("jazz".to_string(), 1));
}

#[test]
fn test_frequency_count_ties_keep_insertion_order() {
    let rows = vec![
        create_test_row("a", "X", "rock", "eng", 3.0, 50, Explicitness::Clean, "2020"),
        create_test_row("b", "X", "jazz", "eng", 3.0, 50, Explicitness::Clean, "2020"),
        create_test_row("c", "X", "pop", "eng", 3.0, 50, Explicitness::Clean, "2020"),
    ];

    // All counts are equal, so the first-encountered key stays first
    let counts = frequency_count(&rows, |r| r.genre.as_str());
    let keys: Vec<&str> = counts.iter().map(|(k, _)| k.as_str()).collect();

    assert_eq!(keys, vec!["rock", "jazz", "pop"]);
}

#[test]
fn test_group_mean_descending() {
    let rows = vec![
        create_test_row("a", "Low", "pop", "eng", 3.0, 20, Explicitness::Clean, "2020"),
        create_test_row("b", "Low", "pop", "eng", 3.0, 40, Explicitness::Clean, "2020"),
        create_test_row("c", "High", "pop", "eng", 3.0, 80, Explicitness::Clean, "2020"),
        create_test_row("d", "High", "pop", "eng", 3.0, 90, Explicitness::Clean, "2020"),
    ];

    let means = group_mean(&rows, |r| r.artist.as_str(), |r| r.popularity as f64);

    assert_eq!(means.len(), 2);
    assert_eq!(means[0].0, "High");
    assert_eq!(means[0].1, 85.0);
    assert_eq!(means[1].0, "Low");
    assert_eq!(means[1].1, 30.0);
}

#[test]
fn test_diversity_score_exact_formula() {
    // 5 distinct genres, 3 distinct languages, 4 distinct years, mean
    // popularity 60 -> 2*5 + 2*3 + 4 + (100-60) = 60
    let rows = vec![
        create_test_row("a", "X", "g1", "l1", 3.0, 60, Explicitness::Clean, "2001"),
        create_test_row("b", "X", "g2", "l2", 3.0, 60, Explicitness::Clean, "2002"),
        create_test_row("c", "X", "g3", "l3", 3.0, 60, Explicitness::Clean, "2003"),
        create_test_row("d", "X", "g4", "l1", 3.0, 60, Explicitness::Clean, "2004"),
        create_test_row("e", "X", "g5", "l2", 3.0, 60, Explicitness::Clean, "2001"),
    ];

    assert_eq!(diversity_score(&rows), 60.0);
}

#[test]
fn test_diversity_score_is_not_clamped() {
    // A single extremely unpopular track: 2 + 2 + 1 + (100-0) = 105
    let rows = vec![create_test_row(
        "a",
        "X",
        "g",
        "l",
        3.0,
        0,
        Explicitness::Clean,
        "2001",
    )];

    assert_eq!(diversity_score(&rows), 105.0);
}

#[test]
fn test_diversity_score_empty_dataset() {
    assert_eq!(diversity_score(&[]), 0.0);
}

#[test]
fn test_cluster_too_few_rows_is_boundary_error() {
    let rows = vec![
        create_test_row("a", "X", "pop", "eng", 2.0, 20, Explicitness::Clean, "2020"),
        create_test_row("b", "X", "pop", "eng", 8.0, 90, Explicitness::Clean, "2020"),
    ];

    let result = cluster_tracks(&rows);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("at least"));
}

#[test]
fn test_cluster_assigns_one_label_per_row() {
    let rows = vec![
        create_test_row("a", "X", "pop", "eng", 2.0, 20, Explicitness::Clean, "2020"),
        create_test_row("b", "X", "pop", "eng", 2.1, 25, Explicitness::Clean, "2020"),
        create_test_row("c", "X", "pop", "eng", 5.0, 60, Explicitness::Clean, "2020"),
        create_test_row("d", "X", "pop", "eng", 5.1, 62, Explicitness::Clean, "2020"),
        create_test_row("e", "X", "pop", "eng", 8.0, 90, Explicitness::Clean, "2020"),
        create_test_row("f", "X", "pop", "eng", 8.2, 95, Explicitness::Clean, "2020"),
    ];

    let labels = cluster_tracks(&rows).unwrap();

    assert_eq!(labels.len(), rows.len());
    assert!(labels.iter().all(|&label| label < CLUSTER_COUNT));
}

#[test]
fn test_cluster_is_reproducible() {
    let rows: Vec<EnrichedTrack> = (0..10)
        .map(|i| {
            create_test_row(
                &format!("t{}", i),
                "X",
                "pop",
                "eng",
                2.0 + i as f64,
                (10 * i) as u32,
                Explicitness::Clean,
                "2020",
            )
        })
        .collect();

    // Fixed seed: two runs over the same dataset assign identical labels
    assert_eq!(cluster_tracks(&rows).unwrap(), cluster_tracks(&rows).unwrap());
}

#[test]
fn test_hidden_gems_filter() {
    let rows = vec![
        // qualifies: low popularity, clean, known genre
        create_test_row("gem", "X", "indie", "eng", 3.0, 30, Explicitness::Clean, "2020"),
        // too popular
        create_test_row("hit", "X", "indie", "eng", 3.0, 50, Explicitness::Clean, "2020"),
        // explicit
        create_test_row("raw", "X", "indie", "eng", 3.0, 30, Explicitness::Explicit, "2020"),
        // unknown genre is excluded even below the popularity bar
        create_test_row("mys", "X", "Unknown", "eng", 3.0, 30, Explicitness::Clean, "2020"),
        // boundary: popularity 40 is not below the bar
        create_test_row("edge", "X", "indie", "eng", 3.0, 40, Explicitness::Clean, "2020"),
    ];

    let gems = hidden_gems(&rows);

    assert_eq!(gems.len(), 1);
    assert_eq!(gems[0].name, "gem");
}
