//! Optional `.env` dotfile loading.
//!
//! The dotfile facility is a Cargo feature (`dotenv`, on by default). With
//! the feature disabled, [`load`] compiles to a no-op, so builds without the
//! facility behave exactly like runs without a dotfile.

#[cfg(feature = "dotenv")]
use std::path::Path;

/// Dotfile looked for in the working directory (pre-commit runs hooks at the
/// repository root).
pub const ENV_FILE: &str = ".env";

/// Load `./.env` into the process environment if it exists.
///
/// Additive only: variables already set in the environment are never
/// overwritten. A dotfile that fails to load is warned about and otherwise
/// ignored; only the loader's own error type is swallowed here.
#[cfg(feature = "dotenv")]
pub fn load() {
    load_from(Path::new(ENV_FILE));
}

/// Built without the `dotenv` feature: no dotfile facility, nothing to do.
#[cfg(not(feature = "dotenv"))]
pub fn load() {}

#[cfg(feature = "dotenv")]
fn load_from(path: &Path) {
    if !path.exists() {
        log::debug!("no {} file, skipping dotfile load", path.display());
        return;
    }
    if let Err(e) = dotenvy::from_path(path) {
        log::warn!("ignoring {}: {e}", path.display());
    }
}
