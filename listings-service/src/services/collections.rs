//! Named collection registry.
//!
//! Every collection name used by the platform lives here as a single
//! constant, so scrapers and readers cannot drift apart on the spelling.
//! Resolution is a pure lookup over an explicitly passed database handle:
//! no caching, no side effects, no validation.

use mongodb::{bson::Document, Collection, Database};

/// Raw scrape output from the Haraj marketplace.
pub mod scrape {
    use super::*;

    pub const SCRAPE_COLLECTION: &str = "harajScrape";
    pub const CARS_COLLECTION: &str = "CarsHaraj";

    /// Primary scrape collection: full listing pages as scraped.
    pub fn scrape_collection(db: &Database) -> Collection<Document> {
        db.collection(SCRAPE_COLLECTION)
    }

    /// Secondary scrape collection: car posts extracted from the scrape.
    pub fn cars_collection(db: &Database) -> Collection<Document> {
        db.collection(CARS_COLLECTION)
    }
}

/// Normalized listings sourced from YallaMotor.
pub mod listings {
    use super::*;

    pub const LISTINGS_COLLECTION: &str = "yallamotortest";
    pub const USED_COLLECTION: &str = "YallaUsed";

    /// Primary listings collection.
    pub fn listings_collection(db: &Database) -> Collection<Document> {
        db.collection(LISTINGS_COLLECTION)
    }

    /// Secondary collection holding used-car listings.
    pub fn used_collection(db: &Database) -> Collection<Document> {
        db.collection(USED_COLLECTION)
    }
}
