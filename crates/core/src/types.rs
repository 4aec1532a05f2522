/// Item ids are PostgreSQL BIGSERIAL values, assigned on insert.
pub type DbId = i64;

/// Stored as TIMESTAMPTZ, always handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
