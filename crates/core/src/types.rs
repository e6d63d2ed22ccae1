/// Record ids are 64-bit integers in both storage backends (BIGSERIAL in Postgres).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
