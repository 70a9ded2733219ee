//! Collection encoding.
//!
//! A collection is stored as pretty-printed JSON inside an envelope:
//!
//! ```text
//! { "version": 1, "records": [ { "id": "…", … }, … ] }
//! ```
//!
//! A bare JSON array is the unversioned layout written before the envelope
//! existed; it decodes as version 0 and is rewritten in the current layout on
//! the next save. Versions newer than [`SCHEMA_VERSION`] are refused rather
//! than guessed at.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u32,
    records: &'a [T],
}

#[derive(Debug)]
pub struct Decoded<T> {
    pub version: u32,
    pub records: Vec<T>,
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema version {0} is newer than supported version {max}", max = SCHEMA_VERSION)]
    UnsupportedVersion(u64),

    #[error("expected a record list or a versioned envelope")]
    NotACollection,
}

pub fn encode<T: Serialize>(records: &[T]) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(&Envelope {
        version: SCHEMA_VERSION,
        records,
    })
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Decoded<T>, CodecError> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Array(_) => Ok(Decoded {
            version: 0,
            records: serde_json::from_value(value)?,
        }),
        Value::Object(mut map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or(CodecError::NotACollection)?;
            if version > u64::from(SCHEMA_VERSION) {
                return Err(CodecError::UnsupportedVersion(version));
            }
            let records = map.remove("records").ok_or(CodecError::NotACollection)?;
            Ok(Decoded {
                version: version as u32,
                records: serde_json::from_value(records)?,
            })
        }
        _ => Err(CodecError::NotACollection),
    }
}
