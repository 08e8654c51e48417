//! Reads the raw bytes of a data file from disk or over HTTP.

use crate::ListingError;

/// Returns `true` if `location` should be fetched over HTTP rather than
/// read from the local filesystem.
#[must_use]
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Reads the full contents of `location`.
///
/// # Errors
///
/// Returns [`ListingError`] if the file cannot be read or the request
/// fails or returns a non-success status.
pub async fn read_location(location: &str) -> Result<Vec<u8>, ListingError> {
    if is_remote(location) {
        let response = reqwest::get(location).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        log::debug!("Downloaded {} bytes from {location}", bytes.len());
        Ok(bytes.to_vec())
    } else {
        let bytes = tokio::fs::read(location).await?;
        log::debug!("Read {} bytes from {location}", bytes.len());
        Ok(bytes)
    }
}
