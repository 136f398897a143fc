use std::collections::HashSet;

use thiserror::Error;

use super::data::{ArtworkId, ArtworkRecord, Status};

/// Read-only supplier of the ordered artwork list.
///
/// The page only ever asks for the whole list, in order. Swapping the
/// source does not touch any rendering code.
pub trait ArtworkSource {
    fn artworks(&self) -> &[ArtworkRecord];
}

/// Errors produced while building a catalog from external data
#[derive(Debug, Error)]
#[cfg_attr(not(test), allow(dead_code))]
pub enum CatalogError {
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate artwork id {0}")]
    DuplicateId(ArtworkId),
}

/// The portfolio as it ships with the app.
/// Rebuilt from scratch every time the process starts.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    records: Vec<ArtworkRecord>,
}

impl SeedCatalog {
    pub fn new() -> Self {
        use Status::{Available, Sold};

        let records = vec![
            ArtworkRecord::new(1, "Koal Chibi (Custom)", "10-10-2025", Sold, "1.jpg"),
            ArtworkRecord::new(2, "Hyena Chibi (Custom)", "09-10-2025", Sold, "2.jpg"),
            ArtworkRecord::new(3, "Hybrid Chibi (Custom)", "15-9-2025", Sold, "3.jpg"),
            ArtworkRecord::new(4, "Jiggly Puff Halloween Adopt (Premade)", "05-10-2025", Available, "4.jpg"),
            ArtworkRecord::new(5, "Business Branding of Chloe's Bakeshop (Custom)", "7-10-25", Sold, "5.jpg"),
            ArtworkRecord::new(6, "Business Branding of Chloe's Bakeshop (Custom)", "7-10-25", Sold, "6.jpg"),
            ArtworkRecord::new(7, "Cute Goth Bunny Chibi Adopt (Premade)", "30-9-25", Available, "7.jpg"),
            ArtworkRecord::new(8, "Cute Cat-fish Hybrid Goth Chibi Adopt (Premade) ", "30-9-25", Available, "8.jpg"),
            ArtworkRecord::new(9, "Cute Fox Mantis Goth Chibi Adopt (Premade)", "30-9-25", Available, "9.jpg"),
            ArtworkRecord::new(10, "Cute Fox Mantis Goth Chibi Adopt (Premade)", "30-9-25", Available, "10.jpg"),
            ArtworkRecord::new(11, "Cute Opossum Goth Chibi Adopt (Premade)", "30-9-25", Available, "11.jpg"),
            ArtworkRecord::new(12, "Koal Reference Sheet (Custom)", "14-8-25", Sold, "12.jpg"),
            ArtworkRecord::new(13, "Bolt Reference Sheet (Custom)", "3-7-25", Sold, "13.jpg"),
            ArtworkRecord::new(14, "Dangling Chibi Keychain (Base, Premade)", "5-7-25", Sold, "14.jpg"),
            ArtworkRecord::new(15, "Panda Chibi (Custom)", "14-10-25", Sold, "15.png"),
            ArtworkRecord::new(16, "Drew the Dog Chibi (Custom)", "12-10-25", Sold, "16.png"),
            ArtworkRecord::new(17, "Charmander Pokemon Adopt Halloween Batch (Premade)", "5-10-25", Available, "17.png"),
        ];

        Self { records }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtworkSource for SeedCatalog {
    fn artworks(&self) -> &[ArtworkRecord] {
        &self.records
    }
}

/// Artwork list read from a JSON array of records.
///
/// Field names match [`ArtworkRecord`]; status is `"Sold"` or `"Available"`.
/// The shipped binary uses [`SeedCatalog`]; this source is exercised by tests.
#[derive(Debug, Clone)]
#[cfg_attr(not(test), allow(dead_code))]
pub struct JsonCatalog {
    records: Vec<ArtworkRecord>,
}

impl JsonCatalog {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ArtworkRecord> = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        Ok(Self { records })
    }
}

impl ArtworkSource for JsonCatalog {
    fn artworks(&self) -> &[ArtworkRecord] {
        &self.records
    }
}
