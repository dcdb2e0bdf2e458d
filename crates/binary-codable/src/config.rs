//! Encoder/decoder configuration.

use serde::{Deserialize, Serialize};

/// Byte order for multi-byte primitives and length prefixes.
///
/// Both peers of a byte stream must agree on it; it is not recorded in the
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Settings shared by an encoder or decoder and every container it hands out.
///
/// # Example
///
/// ```
/// use binary_codable::{ByteOrder, Config};
///
/// let config = Config::from_json_str(r#"{ "byte_order": "big" }"#).unwrap();
/// assert_eq!(config.byte_order, ByteOrder::Big);
/// assert_eq!(config.max_preallocation, Config::default().max_preallocation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Byte order of primitives and length prefixes.
    pub byte_order: ByteOrder,
    /// Upper bound on elements reserved up front when decoding a sequence.
    /// The declared count is untrusted, so larger sequences grow as they go.
    pub max_preallocation: usize,
    /// Upper bound on bytes a [`StreamDecoder`](crate::StreamDecoder) holds
    /// for a single value that has not finished arriving.
    pub max_buffered: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Little,
            max_preallocation: 4096,
            max_buffered: 64 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Returns a default config using `byte_order`.
    pub fn with_byte_order(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::default()
        }
    }

    /// Parses a config from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
