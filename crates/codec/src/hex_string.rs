use h256conv_common::error::{CodecError, Encoding, Result};
use h256conv_common::utils::converter::{strip_hex_prefix, to_prefixed_hex};

/// Renders bytes as `0x` followed by two lowercase digits per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    to_prefixed_hex(bytes)
}

/// Parses hex digits, with or without a `0x`/`0X` prefix.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    hex::decode(strip_hex_prefix(input)).map_err(|err| CodecError::decode(Encoding::Hex, err))
}
