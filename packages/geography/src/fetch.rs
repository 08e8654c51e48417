//! Reads boundary files from disk or over HTTP.

use crate::GeographyError;

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
/// Returns [`GeographyError`] if the file cannot be read or the request
/// fails or returns a non-success status.
pub async fn read_location(location: &str) -> Result<Vec<u8>, GeographyError> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_remote_locations() {
        assert!(is_remote("https://example.org/europe.topojson"));
        assert!(!is_remote("data/europe.topojson"));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = read_location("no/such/boundaries.topojson")
            .await
            .unwrap_err();
        assert!(matches!(err, GeographyError::Io(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn reads_local_files() {
        let path = std::env::temp_dir().join(format!(
            "airbnb-dashboard-boundaries-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, b"{}").await.unwrap();
        let bytes = read_location(&path.display().to_string()).await.unwrap();
        assert_eq!(bytes, b"{}");
        tokio::fs::remove_file(&path).await.ok();
    }
}
