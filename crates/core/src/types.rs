/// Catalog identifiers are UUID v4 values stored as text.
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
