// Stored movie list schema
//
// Layout of a persisted list (current version):
//
//     {"schema_version": 1, "records": [MovieRecord, ...]}
//
// A bare JSON array of records is the unversioned legacy layout and is still
// read. Decoding never fails: anything unusable becomes an empty list, and
// individual bad records are dropped and counted.

use serde::Serialize;
use std::collections::HashSet;

use super::entity::MovieRecord;

/// Version written by `encode_movies`
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredListRef<'a> {
    schema_version: u32,
    records: &'a [MovieRecord],
}

/// Outcome of decoding a stored list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedMovies {
    /// Records that decoded, first occurrence per id
    pub records: Vec<MovieRecord>,

    /// Records skipped as malformed or duplicated
    pub dropped: usize,

    /// Payload used the unversioned legacy layout
    pub legacy: bool,

    /// Whole payload was unusable (not JSON, wrong shape, unknown version)
    pub rejected: bool,
}

impl DecodedMovies {
    fn rejected() -> Self {
        Self {
            rejected: true,
            ..Self::default()
        }
    }
}

/// Serialize a list in the current schema version
pub fn encode_movies(records: &[MovieRecord]) -> serde_json::Result<String> {
    serde_json::to_string(&StoredListRef {
        schema_version: CURRENT_SCHEMA_VERSION,
        records,
    })
}

/// Decode a stored list, defaulting deterministically on bad input
pub fn decode_movies(raw: &str) -> DecodedMovies {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return DecodedMovies::rejected(),
    };

    match value {
        serde_json::Value::Array(items) => {
            let mut decoded = decode_records(items);
            decoded.legacy = true;
            decoded
        }
        serde_json::Value::Object(mut map) => {
            let version = map.get("schema_version").and_then(|v| v.as_u64());
            if version != Some(u64::from(CURRENT_SCHEMA_VERSION)) {
                return DecodedMovies::rejected();
            }
            match map.remove("records") {
                Some(serde_json::Value::Array(items)) => decode_records(items),
                _ => DecodedMovies::rejected(),
            }
        }
        _ => DecodedMovies::rejected(),
    }
}

fn decode_records(items: Vec<serde_json::Value>) -> DecodedMovies {
    let mut seen = HashSet::new();
    let mut decoded = DecodedMovies::default();

    for item in items {
        let record = match serde_json::from_value::<MovieRecord>(item) {
            Ok(record) => record,
            Err(_) => {
                decoded.dropped += 1;
                continue;
            }
        };

        if !seen.insert(record.id) {
            decoded.dropped += 1;
            continue;
        }

        decoded.records.push(record);
    }

    decoded
}
