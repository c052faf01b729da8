use std::fmt;

#[derive(Debug)]
pub enum MinerError {
    /// Filesystem access failed (capture files, report output)
    Io { path: String, source: std::io::Error },

    /// A capture file was not valid JSON
    JsonParse { context: String, source: serde_json::Error },

    /// Serialization of a report failed
    JsonSerialize { context: String, source: serde_json::Error },

    /// No capture files found at the given path
    NoCaptures(String),

    /// Fewer than two pages captured — cross-page analysis needs at least two
    NotEnoughPages(usize),

    /// Requested report format is not supported
    UnknownFormat(String),
}

impl fmt::Display for MinerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinerError::Io { path, source } => {
                write!(f, "IO error on '{}': {}", path, source)
            }
            MinerError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            MinerError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            MinerError::NoCaptures(path) => {
                write!(f, "No page capture files found at: {}", path)
            }
            MinerError::NotEnoughPages(count) => {
                write!(
                    f,
                    "Cross-page analysis needs at least 2 pages, got {}",
                    count
                )
            }
            MinerError::UnknownFormat(format) => {
                write!(f, "Unknown report format: {}", format)
            }
        }
    }
}

impl std::error::Error for MinerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinerError::Io { source, .. } => Some(source),
            MinerError::JsonParse { source, .. } => Some(source),
            MinerError::JsonSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
