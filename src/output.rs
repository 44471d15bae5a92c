/// Fixture serialization and persistence.
///
/// The whole record set is encoded into one in-memory buffer first, then the
/// target file is created or truncated and written in a single pass. A
/// failed write leaves whatever reached the disk in place.
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::subscription::Subscription;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "subscriptions.json";

/// Permission bits for newly created output files (rw-r--r--).
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("unable to marshal the subscriptions: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unable to write the subscriptions to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Compact JSON array, e.g. `[{"user_name":...},...]`.
pub fn to_json(subscriptions: &[Subscription]) -> Result<Vec<u8>, OutputError> {
    Ok(serde_json::to_vec(subscriptions)?)
}

/// Pretty-printed JSON array with two-space indentation.
pub fn to_json_pretty(subscriptions: &[Subscription]) -> Result<Vec<u8>, OutputError> {
    Ok(serde_json::to_vec_pretty(subscriptions)?)
}

/// Serialize `subscriptions` compactly and write them to `path`.
pub fn write_subscriptions(path: &Path, subscriptions: &[Subscription]) -> Result<(), OutputError> {
    let body = to_json(subscriptions)?;
    write_file(path, &body)
}

/// Create or truncate `path` and write `contents` to it.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    let wrap = |source: io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }

    let mut file = options.open(path).map_err(wrap)?;
    file.write_all(contents).map_err(wrap)?;
    file.flush().map_err(wrap)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(())
}
