use thiserror::Error;

/// Reasons a capsule does not yield a flashback name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("GUID marker not found, this may not be a supported BIOS capsule")]
    MarkerNotFound,

    #[error("'$BOOTEFI$' tag not found after the GUID marker at {marker_offset:#x}")]
    TagNotFound { marker_offset: usize },

    #[error("filename location {start:#x}..{end:#x} is out of bounds (capsule is {len:#x} bytes)")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("filename contains non-ASCII byte {byte:#04x} at position {position}")]
    InvalidEncoding { byte: u8, position: usize },
}
