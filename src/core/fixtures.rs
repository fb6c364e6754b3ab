//! Records live response bodies as test fixtures when `FH_RECORD=1`.
//! Compiled only when the `test-mode` feature is enabled.

use std::fs;
use std::path::{Path, PathBuf};

const RECORD_ENV: &str = "FH_RECORD";
const DIR_ENV: &str = "FH_FIXDIR";

pub(crate) fn recording_enabled() -> bool {
    std::env::var(RECORD_ENV).ok().as_deref() == Some("1")
}

fn fixture_dir() -> PathBuf {
    std::env::var(DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Maps a request key (a symbol, a category, a search query) to a file-name stem.
///
/// Anything outside `[A-Za-z0-9_-]` becomes `_`, so the result never names a
/// path component.
fn file_stem(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() { "_".to_string() } else { stem }
}

fn write_fixture_in(
    dir: &Path,
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}_{}.{ext}", file_stem(endpoint), file_stem(key)));
    fs::write(&path, body)?;
    Ok(path)
}

/// Writes `body` to `{endpoint}_{key}.{ext}` under `FH_FIXDIR` or `tests/fixtures`.
pub(crate) fn record_fixture(endpoint: &str, key: &str, ext: &str, body: &str) {
    match write_fixture_in(&fixture_dir(), endpoint, key, ext, body) {
        Ok(path) => tracing::debug!(path = %path.display(), "recorded fixture"),
        Err(e) => tracing::warn!(endpoint, key, error = %e, "failed to record fixture"),
    }
}
