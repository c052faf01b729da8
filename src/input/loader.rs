use crate::input::capture::PageCapture;
use crate::input::error::MinerError;

// ============================================================================
// Capture loading — single JSON file or a directory of them
// ============================================================================

/// Load page captures from a single JSON file or a directory of `.json`
/// files. Directory entries are sorted by filename for deterministic
/// record order.
pub fn load_captures(path: &str) -> Result<Vec<PageCapture>, MinerError> {
    let metadata = std::fs::metadata(path).map_err(|e| MinerError::Io {
        path: path.to_string(),
        source: e,
    })?;

    if metadata.is_dir() {
        let mut files = Vec::new();
        let entries = std::fs::read_dir(path).map_err(|e| MinerError::Io {
            path: path.to_string(),
            source: e,
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| MinerError::Io {
                path: path.to_string(),
                source: e,
            })?;
            let p = entry.path();
            if p.extension().map_or(false, |e| e == "json") {
                files.push(p);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(MinerError::NoCaptures(path.to_string()));
        }

        let mut captures = Vec::new();
        for file in &files {
            captures.push(load_capture_file(&file.to_string_lossy())?);
        }
        Ok(captures)
    } else {
        Ok(vec![load_capture_file(path)?])
    }
}

/// Parse one capture file.
pub fn load_capture_file(path: &str) -> Result<PageCapture, MinerError> {
    let content = std::fs::read_to_string(path).map_err(|e| MinerError::Io {
        path: path.to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| MinerError::JsonParse {
        context: path.to_string(),
        source: e,
    })
}
