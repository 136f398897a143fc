/// Shared data structures for the gallery
///
/// These structs represent the data model that flows between
/// the artwork source and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an artwork within a catalog (rendering identity only)
pub type ArtworkId = u32;

/// Sale status of a portfolio piece
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Sold,
    Available,
}

/// Color family used to paint a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
}

impl Status {
    /// Badge text, verbatim status name
    pub fn label(&self) -> &'static str {
        match self {
            Status::Sold => "Sold",
            Status::Available => "Available",
        }
    }

    /// Sold pieces are painted red, available ones green
    pub fn tone(&self) -> Tone {
        match self {
            Status::Sold => Tone::Red,
            Status::Available => Tone::Green,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a single portfolio piece
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtworkRecord {
    /// Unique id within the catalog
    pub id: ArtworkId,
    /// Display title (e.g., "Koal Chibi (Custom)")
    pub title: String,
    /// Creation date as free-form display text, never parsed
    pub created_date: String,
    /// Sold or Available
    pub status: Status,
    /// Relative image reference (e.g., "1.jpg")
    pub image_url: String,
}

impl ArtworkRecord {
    pub fn new(
        id: ArtworkId,
        title: &str,
        created_date: &str,
        status: Status,
        image_url: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            created_date: created_date.to_string(),
            status,
            image_url: image_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text_is_status_name() {
        assert_eq!(Status::Sold.label(), "Sold");
        assert_eq!(Status::Available.label(), "Available");
        assert_eq!(Status::Available.to_string(), "Available");
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(Status::Sold.tone(), Tone::Red);
        assert_eq!(Status::Available.tone(), Tone::Green);
    }

    #[test]
    fn test_status_serializes_as_name() {
        let json = serde_json::to_string(&Status::Sold).unwrap();
        assert_eq!(json, "\"Sold\"");
    }
}
