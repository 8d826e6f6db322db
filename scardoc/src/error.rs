use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading an XML API description.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A required attribute is absent. `position` is `line:col` in the source.
    #[error("[{position}] <{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
        position: String,
    },
}

/// Errors raised while writing a scardoc blob.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The external format is single-byte ASCII only.
    #[error("{field} contains non-ASCII text: {value:?}")]
    NonAscii { field: &'static str, value: String },

    /// A length or count does not fit in the format's 4-byte signed integers.
    #[error("{what} too large for the scardoc format: {len}")]
    TooLarge { what: &'static str, len: usize },
}
