//! Pattern search over an in-memory capsule.
//!
//! The flashback record is found in two steps: the first occurrence of the
//! GUID [`MARKER`] anchors the search, then the first `$BOOTEFI$` [`TAG`] at
//! or after that anchor fixes the filename field at [`NAME_OFFSET`] bytes
//! past the tag.
//!
//! The tag search starts at the marker's own offset, not after its 16 bytes.

use memchr::memmem;
use tracing::{debug, trace};

use super::error::ExtractError;
use super::layout::{EfiGuid, Location, MARKER, NAME_LEN, NAME_OFFSET, TAG};

/// Find the marker, the tag, and the filename field within `buffer`.
///
/// # Errors
///
/// Returns [`ExtractError::MarkerNotFound`], [`ExtractError::TagNotFound`]
/// or [`ExtractError::OutOfBounds`] when the corresponding step fails.
pub fn locate(buffer: &[u8]) -> Result<Location, ExtractError> {
    let marker_offset = memmem::find(buffer, &MARKER).ok_or(ExtractError::MarkerNotFound)?;
    trace!(marker_offset, guid = %EfiGuid::marker(), "found GUID marker");

    let tag_offset = memmem::find(&buffer[marker_offset..], TAG)
        .map(|i| marker_offset + i)
        .ok_or(ExtractError::TagNotFound { marker_offset })?;
    trace!(tag_offset, "found $BOOTEFI$ tag");

    let name_offset = tag_offset + NAME_OFFSET;
    let end = name_offset + NAME_LEN;
    if end > buffer.len() {
        return Err(ExtractError::OutOfBounds {
            start: name_offset,
            end,
            len: buffer.len(),
        });
    }

    Ok(Location {
        marker_offset,
        tag_offset,
        name_offset,
    })
}

/// Strip trailing NUL padding from a raw filename field and decode it as ASCII.
pub fn decode_name(field: &[u8]) -> Result<String, ExtractError> {
    let len = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let trimmed = &field[..len];

    if let Some(position) = trimmed.iter().position(|b| !b.is_ascii()) {
        return Err(ExtractError::InvalidEncoding {
            byte: trimmed[position],
            position,
        });
    }

    Ok(trimmed.iter().map(|&b| char::from(b)).collect())
}

/// Extract the USB BIOS Flashback filename from a whole capsule image.
///
/// This is a pure function of `buffer`: calling it twice gives the same
/// result.
///
/// # Example
///
/// ```
/// use flashname::capsule::{extract, MARKER, NAME_OFFSET, TAG};
///
/// let mut image = MARKER.to_vec();
/// let tag_offset = image.len();
/// image.extend_from_slice(TAG);
/// image.resize(tag_offset + NAME_OFFSET, 0);
/// image.extend_from_slice(b"SAMPLE\0\0\0\0\0\0");
///
/// assert_eq!(extract(&image).unwrap(), "SAMPLE");
/// ```
pub fn extract(buffer: &[u8]) -> Result<String, ExtractError> {
    let location = locate(buffer)?;
    let name = decode_name(&buffer[location.name_range()])?;
    debug!(
        marker = location.marker_offset,
        tag = location.tag_offset,
        name_offset = location.name_offset,
        %name,
        "extracted flashback name"
    );
    Ok(name)
}
