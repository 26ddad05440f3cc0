use h256conv_common::error::{CodecError, Encoding, Result};

/// Encodes bytes with the Bitcoin Base58 alphabet, no checksum.
///
/// Each leading `0x00` byte becomes a leading `1`.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decodes a Base58 string. Each leading `1` becomes a leading `0x00` byte.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    bs58::decode(input)
        .into_vec()
        .map_err(|err| CodecError::decode(Encoding::Base58, err))
}
