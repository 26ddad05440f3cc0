//! Conversion between Solana Base58 addresses and Substrate `H256` hashes.
//!
//! Both forms carry the same 32 bytes. The Base58 form has no checksum.

pub mod base58;
pub mod hex_string;
pub mod types;

use tracing::debug;

pub use h256conv_common::error::{CodecError, Encoding, Result};
pub use types::{SolanaAddress, ADDRESS_LENGTH, H256};

/// Converts a Base58 address into a lowercase `0x`-prefixed H256 string.
pub fn base58_to_h256(address: &str) -> Result<String> {
    let address: SolanaAddress = address.parse().map_err(|err| {
        debug!(input = address, %err, "rejected Base58 address");
        err
    })?;
    let hash = address.to_h256();
    debug!(%address, %hash, "converted Base58 address to H256");
    Ok(hash.to_string())
}

/// Converts an H256 hex string (`0x` prefix optional) into a Base58 address.
pub fn h256_to_base58(hex: &str) -> Result<String> {
    let hash: H256 = hex.parse().map_err(|err| {
        debug!(input = hex, %err, "rejected H256 string");
        err
    })?;
    let address = hash.to_solana_address();
    debug!(%hash, %address, "converted H256 to Base58 address");
    Ok(address.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "CA4ALvCam45ecioBfZ7BzPsXMf3r6BRXZ8iKdGpPmqhp";
    const ADDRESS_H256: &str = "0xa5c25b944117c17fc1cd26555761e1a274c6576df5a48a7e51183ba211aba65f";

    #[test]
    fn test_base58_to_h256() {
        assert_eq!(base58_to_h256(ADDRESS).unwrap(), ADDRESS_H256);
    }

    #[test]
    fn test_h256_to_base58() {
        assert_eq!(h256_to_base58(ADDRESS_H256).unwrap(), ADDRESS);
    }

    #[test]
    fn test_all_zero_hash() {
        let zeros = format!("0x{}", "0".repeat(64));
        assert_eq!(h256_to_base58(&zeros).unwrap(), "1".repeat(32));
        assert_eq!(base58_to_h256(&"1".repeat(32)).unwrap(), zeros);
    }

    #[test]
    fn test_prefix_tolerance() {
        let bare = ADDRESS_H256.trim_start_matches("0x");
        let upper_prefix = format!("0X{}", bare);
        let upper_digits = format!("0x{}", bare.to_uppercase());

        assert_eq!(h256_to_base58(bare).unwrap(), ADDRESS);
        assert_eq!(h256_to_base58(&upper_prefix).unwrap(), ADDRESS);
        assert_eq!(h256_to_base58(&upper_digits).unwrap(), ADDRESS);
    }

    #[test]
    fn test_short_address_rejected() {
        // "3yZe7d" decodes to b"test"
        let err = base58_to_h256("3yZe7d").unwrap_err();
        assert_eq!(err, CodecError::invalid_length(Encoding::Base58, 4, 32));
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(matches!(
            base58_to_h256(""),
            Err(CodecError::InvalidLength { actual: 0, .. })
        ));
        assert!(matches!(
            h256_to_base58("0x"),
            Err(CodecError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn test_excluded_characters_rejected() {
        for bad in ['0', 'O', 'I', 'l'] {
            let mut input = ADDRESS.to_string();
            input.replace_range(5..6, &bad.to_string());
            let err = base58_to_h256(&input).unwrap_err();
            assert!(
                matches!(err, CodecError::DecodeError { encoding: Encoding::Base58, .. }),
                "{bad} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_non_hex_rejected() {
        let input = format!("0x{}zz", "ab".repeat(31));
        let err = h256_to_base58(&input).unwrap_err();
        assert!(matches!(err, CodecError::DecodeError { encoding: Encoding::Hex, .. }));
    }

    #[test]
    fn test_odd_length_hex_rejected() {
        let input = format!("0x{}", "a".repeat(63));
        let err = h256_to_base58(&input).unwrap_err();
        assert!(matches!(err, CodecError::DecodeError { encoding: Encoding::Hex, .. }));
    }

    #[test]
    fn test_wrong_hex_length_rejected() {
        let err = h256_to_base58(&"ab".repeat(33)).unwrap_err();
        assert_eq!(err, CodecError::invalid_length(Encoding::Hex, 33, 32));
    }
}
