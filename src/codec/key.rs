//! Key Codec Module
//!
//! Normalizes application-level cache keys into store-safe strings.

use sha2::{Digest, Sha256};

// == Constants ==
/// Longest string key that may pass through unhashed.
const MAX_VERBATIM_KEY_LENGTH: usize = 32;

// == Cache Key ==
/// An application-level cache key.
///
/// Keys may be simple strings or numbers, or composite structures built
/// from them. Equal keys always normalize to the identical store key;
/// distinct keys collide only with cryptographic-hash probability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheKey {
    /// A plain string key
    Str(String),
    /// An integer key
    Int(i64),
    /// An ordered sequence of keys, e.g. `("user", 42, "profile")`
    Seq(Vec<CacheKey>),
    /// A mapping of field names to keys; entry order does not affect
    /// the resulting store key
    Map(Vec<(String, CacheKey)>),
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        CacheKey::Str(s.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        CacheKey::Str(s)
    }
}

impl From<i64> for CacheKey {
    fn from(n: i64) -> Self {
        CacheKey::Int(n)
    }
}

impl CacheKey {
    // == Canonical Form ==
    /// Renders the key as a canonical byte sequence.
    ///
    /// The encoding is JSON-shaped with map entries sorted by field name at
    /// every level, so structurally equal keys always produce identical
    /// bytes regardless of how the caller ordered map entries.
    fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out.into_bytes()
    }

    fn write_canonical(&self, out: &mut String) {
        match self {
            CacheKey::Str(s) => {
                // serde_json string escaping is deterministic
                out.push_str(&serde_json::to_string(s).unwrap_or_default());
            }
            CacheKey::Int(n) => {
                out.push_str(&n.to_string());
            }
            CacheKey::Seq(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_canonical(out);
                }
                out.push(']');
            }
            CacheKey::Map(entries) => {
                let mut sorted: Vec<&(String, CacheKey)> = entries.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(&b.0));
                out.push('{');
                for (i, (field, value)) in sorted.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(&serde_json::to_string(field).unwrap_or_default());
                    out.push(':');
                    value.write_canonical(out);
                }
                out.push('}');
            }
        }
    }

    /// Returns the string slice if this key may be used verbatim:
    /// a short, non-empty string within the store-safe alphabet.
    fn verbatim(&self) -> Option<&str> {
        match self {
            CacheKey::Str(s)
                if !s.is_empty()
                    && s.len() <= MAX_VERBATIM_KEY_LENGTH
                    && s.chars().all(store_safe_char) =>
            {
                Some(s)
            }
            _ => None,
        }
    }
}

fn store_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-')
}

// == Key Codec ==
/// Builds store keys from application keys.
///
/// Output is always `<prefix><normalized>`: short store-safe string keys
/// pass through untouched for readability, everything else is canonically
/// serialized and SHA-256 hashed so the store key length stays bounded
/// regardless of input size.
#[derive(Debug, Clone)]
pub struct KeyCodec {
    /// Namespace prefix prepended to every store key
    prefix: String,
}

impl KeyCodec {
    // == Constructor ==
    /// Creates a new KeyCodec with the given namespace prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the namespace prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    // == Build ==
    /// Maps an application key to its store key.
    ///
    /// Pure function of (prefix, key): no state, no randomness, no errors.
    pub fn build(&self, key: &CacheKey) -> String {
        match key.verbatim() {
            Some(s) => format!("{}{}", self.prefix, s),
            None => {
                let digest = Sha256::digest(key.canonical_bytes());
                format!("{}{}", self.prefix, hex::encode(digest))
            }
        }
    }
}
