use std::path::Path;

/// Loads variables from a `.env` file if there is one. Variables already set take precedence.
pub(crate) fn load(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring {}: {e}", path.display()),
    }
}
