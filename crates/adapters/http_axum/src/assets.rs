//! Static serving of the compiled dashboard bundle.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Serve files from `dir`, answering unknown paths with `dir/index.html`.
///
/// The dashboard routes on the client (`/campaigns/7`, `/register`, …), so a
/// hard reload on such a path must still return the app shell.
pub fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dir.join("index.html")))
}
