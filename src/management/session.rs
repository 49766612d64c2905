/// Session-scoped playlist state.
///
/// Constructed once per CLI invocation and passed by reference into the
/// playlist flow, so "a playlist was already created this session" is
/// explicit state instead of an ambient global.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub playlist_created: bool,
    pub playlist_url: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_playlist_created(&mut self, url: String) {
        self.playlist_created = true;
        self.playlist_url = Some(url);
    }
}
