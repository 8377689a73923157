use crate::error::{ClippingsError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Read the whole clippings export into memory.
///
/// The export is small (one file per device) and records span multiple lines,
/// so it is loaded at once rather than streamed line by line.
pub async fn read_clippings<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let path = file_path.as_ref();
    let start_time = std::time::Instant::now();

    debug!("Starting async read of file: {}", path.display());

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read clippings file {}: {}", path.display(), e);
            return Err(ClippingsError::InputNotReadable {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    info!(
        "Read {}: {} bytes in {}ms",
        path.display(),
        content.len(),
        start_time.elapsed().as_millis()
    );

    Ok(content)
}
