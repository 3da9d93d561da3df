use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;

/// Serializes a value into the protocol's JSON wire form.
///
/// Codec failures are surfaced as `io::Error` with `InvalidData`, matching
/// the error convention of the method binding traits.
pub fn encode_json<T: Serialize>(value: &T) -> Result<Vec<u8>, io::Error> {
    serde_json::to_vec(value).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Deserializes a value from the protocol's JSON wire form.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, io::Error> {
    serde_json::from_slice(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
