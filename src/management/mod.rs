mod auth;
mod dataset;
mod session;

pub use auth::TokenManager;
pub use dataset::fetch_window;
pub use dataset::load_all;
pub use session::SessionState;
