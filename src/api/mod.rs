//! # API Module
//!
//! This module provides the HTTP endpoints served by the local callback
//! server during authentication.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles the OAuth callback from Spotify's authorization
//!   server and completes the PKCE flow by exchanging the authorization
//!   code for an access token.
//! - [`health`] - Health check returning application status and version.
//!
//! The endpoints are plain async [Axum](https://docs.rs/axum) handlers and
//! are wired into a router by [`crate::server`]. The OAuth 2.0 PKCE flow
//! keeps the client secret out of the picture entirely; temporary
//! authentication state lives in a shared `Arc<Mutex<..>>` that the CLI
//! polls while the browser round-trip is in flight.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
