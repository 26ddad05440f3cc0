/// Prefix carried by canonical H256 strings.
pub const HEX_PREFIX: &str = "0x";

/// Converts a byte slice to a lowercase `0x`-prefixed hex string.
pub fn to_prefixed_hex<T: AsRef<[u8]>>(data: T) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(data))
}

/// Strips a leading `0x` or `0X` if present.
pub fn strip_hex_prefix(data: &str) -> &str {
    match data.get(..HEX_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(HEX_PREFIX) => &data[HEX_PREFIX.len()..],
        _ => data,
    }
}
