/// Row id of every table (`BIGSERIAL`). User ids from the auth service share it.
pub type DbId = i64;

/// Stored timestamps, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
