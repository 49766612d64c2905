//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! Tastecli: authentication, profile and top-track retrieval, artist
//! metadata lookups, track search, and playlist management. It is the
//! integration layer between the enrichment pipeline and Spotify's
//! services, handling HTTP communication, the OAuth flow, error handling
//! and rate limiting.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── User Profile
//!     ├── Artist Metadata (genres)
//!     ├── Top Tracks & Search
//!     └── Playlist Operations (Create, Modify)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: code verifier/challenge generation,
//!   browser launch, local callback server coordination, token persistence.
//!   PKCE needs no stored client secret, which suits a desktop CLI.
//! - [`user`] - Current-user profile retrieval; this doubles as the startup
//!   authentication check, since no other operation works without a valid
//!   identity.
//! - [`artists`] - Single-artist metadata lookups, the source of the genre
//!   column during enrichment.
//! - [`tracks`] - Top tracks per listening window and free-text track
//!   search for playlist building.
//! - [`playlist`] - Playlist creation, duplicate detection and track
//!   insertion.
//!
//! ## Error Handling
//!
//! - **Rate limiting**: 429 responses are retried after honoring the
//!   `Retry-After` header, with a warning for abnormally long delays.
//! - **Transient errors**: 502 Bad Gateway responses are retried after a
//!   fixed delay; other HTTP errors are propagated to the caller.
//! - **Token expiration**: tokens are refreshed transparently through the
//!   [`TokenManager`](crate::management::TokenManager) with a safety buffer
//!   before expiry.
//!
//! Callers decide what a failure means: the enrichment layer degrades
//! lookup failures to sentinel values, the fetch layer surfaces them as
//! user-visible warnings and continues with an empty dataset.
//!
//! ## API Coverage
//!
//! - `GET /me` - current user profile
//! - `GET /me/top/tracks` - top tracks for a time range
//! - `GET /artists/{id}` - artist metadata by id
//! - `GET /search` - track search by free text
//! - `GET /me/playlists` - playlists for duplicate checking
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks to a playlist
//! - `POST /api/token` - token exchange and refresh

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod tracks;
pub mod user;
