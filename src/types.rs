use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// One of the three listening-history ranges supported by the Spotify
/// top-tracks endpoint. The set is fixed; every dashboard load fetches
/// all three plus the currently selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    Short,
    Medium,
    Long,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [TimeWindow::Short, TimeWindow::Medium, TimeWindow::Long];

    /// Value of the `time_range` query parameter.
    pub fn api_value(&self) -> &'static str {
        match self {
            TimeWindow::Short => "short_term",
            TimeWindow::Medium => "medium_term",
            TimeWindow::Long => "long_term",
        }
    }

    /// Human-readable label used in headings.
    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Short => "Last 4 Weeks",
            TimeWindow::Medium => "Last 6 Months",
            TimeWindow::Long => "All Time",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_value())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub images: Vec<ProfileImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub duration_ms: u64,
    pub popularity: u32,
    pub explicit: bool,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub id: String,
    pub name: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<PlaylistSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

/// Whether Spotify flags a track as explicit. Rendered and exported as
/// `Explicit` or `Clean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Explicitness {
    Explicit,
    Clean,
}

impl From<bool> for Explicitness {
    fn from(explicit: bool) -> Self {
        if explicit {
            Explicitness::Explicit
        } else {
            Explicitness::Clean
        }
    }
}

impl fmt::Display for Explicitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Explicitness::Explicit => write!(f, "Explicit"),
            Explicitness::Clean => write!(f, "Clean"),
        }
    }
}

/// One fully enriched track row. Immutable once constructed; cluster labels
/// are produced as a separate parallel column and never written back into
/// the row.
///
/// Serde renames match the exported CSV headers.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct EnrichedTrack {
    #[tabled(rename = "Track Name")]
    #[serde(rename = "Track Name")]
    pub name: String,
    #[tabled(rename = "Artist")]
    #[serde(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Album")]
    #[serde(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Genre")]
    #[serde(rename = "Genre")]
    pub genre: String,
    #[tabled(rename = "Language")]
    #[serde(rename = "Language")]
    pub language: String,
    #[tabled(rename = "Duration (min)")]
    #[serde(rename = "Duration (min)")]
    pub duration_min: f64,
    #[tabled(rename = "Popularity")]
    #[serde(rename = "Popularity")]
    pub popularity: u32,
    #[tabled(rename = "Explicit")]
    #[serde(rename = "Explicit")]
    pub explicit: Explicitness,
    #[tabled(rename = "Release Year")]
    #[serde(rename = "Release Year")]
    pub release_year: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    pub country: String,
}

/// The enriched rows of one time window, in API response order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub window: TimeWindow,
    pub rows: Vec<EnrichedTrack>,
}

impl Dataset {
    pub fn new(window: TimeWindow, rows: Vec<EnrichedTrack>) -> Self {
        Self { window, rows }
    }

    pub fn empty(window: TimeWindow) -> Self {
        Self {
            window,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All datasets of one dashboard load: the three fixed windows plus an
/// independently re-fetched copy of whichever window is selected.
#[derive(Debug, Clone)]
pub struct WindowedDatasets {
    pub short: Dataset,
    pub medium: Dataset,
    pub long: Dataset,
    pub selected: Dataset,
}

#[derive(Tabled)]
pub struct CountTableRow {
    pub name: String,
    pub count: usize,
}

#[derive(Tabled)]
pub struct MeanTableRow {
    pub name: String,
    pub mean: String,
}

#[derive(Tabled)]
pub struct ClusterTableRow {
    pub track: String,
    pub artist: String,
    pub duration_min: f64,
    pub popularity: u32,
    pub cluster: usize,
}
