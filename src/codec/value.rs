//! Value Codec Module
//!
//! Serializes application values to and from the store's byte representation.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CacheError, Result};

// == Json Codec ==
/// JSON value codec.
///
/// Round-trips every JSON-representable value: `decode(encode(v)) == v`
/// including nulls, booleans, numbers, strings, and nested composites.
///
/// The codec never sees "key absent": the cache maps a store miss to a
/// miss result before decoding, so a decode failure always means the
/// stored bytes are corrupt, not that the key was missing.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    // == Encode ==
    /// Serializes a value into store bytes.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|source| CacheError::Encode { source })
    }

    // == Decode ==
    /// Deserializes store bytes back into a value.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|source| CacheError::Decode { source })
    }
}
