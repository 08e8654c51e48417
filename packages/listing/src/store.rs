//! In-memory, read-only store of normalized listings.

use std::collections::BTreeSet;
use std::io::Read;

use airbnb_dashboard_listing_models::{Listing, RawListingRow};

use crate::ListingError;
use crate::fetch::read_location;

/// The flat array of listings loaded at startup.
///
/// Owned by the dashboard for its whole lifetime and never mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    /// Wraps an already-normalized list of listings.
    #[must_use]
    pub const fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Loads and normalizes the listings CSV at `location` (path or URL).
    ///
    /// # Errors
    ///
    /// Returns [`ListingError`] if the file cannot be fetched or is not a
    /// valid CSV.
    pub async fn load(location: &str) -> Result<Self, ListingError> {
        log::info!("Loading listings from {location}");
        let bytes = read_location(location).await?;
        let store = Self::from_csv_reader(bytes.as_slice())?;
        log::info!("Loaded {} listings", store.len());
        Ok(store)
    }

    /// Parses listings from CSV data with a header row.
    ///
    /// Cells are decoded as UTF-8 lossily, so a stray non-UTF-8 byte only
    /// garbles that cell. Rows without a country are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError`] if the CSV has no header row or a record
    /// cannot be read.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ListingError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv::StringRecord::from_byte_record_lossy(reader.byte_headers()?.clone());
        if headers.is_empty() {
            return Err(ListingError::Conversion {
                message: "Listings CSV contains no header row".to_string(),
            });
        }

        let mut listings = Vec::new();
        let mut skipped: u64 = 0;

        for (i, result) in reader.byte_records().enumerate() {
            let record = csv::StringRecord::from_byte_record_lossy(result?);
            let row: RawListingRow = record.deserialize(Some(&headers))?;
            if let Some(listing) = Listing::from_row(row) {
                listings.push(listing);
            } else {
                skipped += 1;
                log::warn!("Skipping listing row {}: missing country", i + 1);
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} listing rows without a country");
        }

        Ok(Self { listings })
    }

    /// All listings in load order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the store holds no listings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Distinct normalized country names in order of first appearance.
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.listings
            .iter()
            .map(|l| l.country.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}
