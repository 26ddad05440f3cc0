use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use h256conv_common::error::{CodecError, Encoding, Result};

use crate::{base58, hex_string};

/// Byte length shared by Solana public keys and Substrate hashes.
pub const ADDRESS_LENGTH: usize = 32;

fn to_array(encoding: Encoding, bytes: &[u8]) -> Result<[u8; ADDRESS_LENGTH]> {
    <[u8; ADDRESS_LENGTH]>::try_from(bytes)
        .map_err(|_| CodecError::invalid_length(encoding, bytes.len(), ADDRESS_LENGTH))
}

// --- NewTypes ---

/// A 32-byte Solana public key, displayed as Base58.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct SolanaAddress(pub [u8; ADDRESS_LENGTH]);

impl SolanaAddress {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        to_array(Encoding::Base58, bytes).map(SolanaAddress)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn to_h256(&self) -> H256 {
        H256(self.0)
    }
}

impl fmt::Debug for SolanaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SolanaAddress({})", base58::encode(&self.0))
    }
}

impl fmt::Display for SolanaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", base58::encode(&self.0))
    }
}

impl FromStr for SolanaAddress {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = base58::decode(s)?;
        SolanaAddress::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for SolanaAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for SolanaAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        SolanaAddress(bytes)
    }
}

impl From<H256> for SolanaAddress {
    fn from(hash: H256) -> Self {
        SolanaAddress(hash.0)
    }
}

impl Serialize for SolanaAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SolanaAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A 32-byte Substrate hash, displayed as lowercase `0x` hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct H256(pub [u8; ADDRESS_LENGTH]);

impl H256 {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        to_array(Encoding::Hex, bytes).map(H256)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn to_solana_address(&self) -> SolanaAddress {
        SolanaAddress(self.0)
    }
}

impl fmt::Debug for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H256({})", hex_string::bytes_to_hex(&self.0))
    }
}

impl fmt::Display for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex_string::bytes_to_hex(&self.0))
    }
}

impl FromStr for H256 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex_string::hex_to_bytes(s)?;
        H256::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for H256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for H256 {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        H256(bytes)
    }
}

impl From<SolanaAddress> for H256 {
    fn from(address: SolanaAddress) -> Self {
        H256(address.0)
    }
}

impl Serialize for H256 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for H256 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
    const USDC_MINT_H256: &str =
        "0xc6fa7af3bedbad3a3d65f36aabc97431b1bbe4c2d2f6e0e47ca60203452f5d61";

    #[test]
    fn test_address_and_hash_share_bytes() {
        let address: SolanaAddress = USDC_MINT.parse().unwrap();
        let hash = address.to_h256();

        assert_eq!(hash.to_string(), USDC_MINT_H256);
        assert_eq!(hash.as_bytes(), address.as_bytes());
        assert_eq!(SolanaAddress::from(hash), address);
        assert_eq!(H256::from(address), hash);
    }

    #[test]
    fn test_from_slice_checks_length() {
        assert!(H256::from_slice(&[0u8; 32]).is_ok());
        assert_eq!(
            H256::from_slice(&[0u8; 20]).unwrap_err(),
            CodecError::invalid_length(Encoding::Hex, 20, 32)
        );
        assert_eq!(
            SolanaAddress::from_slice(&[0u8; 33]).unwrap_err(),
            CodecError::invalid_length(Encoding::Base58, 33, 32)
        );
    }

    #[test]
    fn test_debug_format() {
        let hash = H256([0xab; 32]);
        assert_eq!(format!("{:?}", hash), format!("H256(0x{})", "ab".repeat(32)));

        let address = SolanaAddress::default();
        assert_eq!(format!("{:?}", address), format!("SolanaAddress({})", "1".repeat(32)));
    }

    #[test]
    fn test_serde_uses_canonical_strings() {
        let hash: H256 = USDC_MINT_H256.to_uppercase().replace("0X", "0x").parse().unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", USDC_MINT_H256));

        let address: SolanaAddress = serde_json::from_str(&format!("\"{}\"", USDC_MINT)).unwrap();
        assert_eq!(address.to_h256(), hash);
    }

    #[test]
    fn test_serde_rejects_bad_length() {
        let result: std::result::Result<H256, _> = serde_json::from_str("\"0xabcd\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid H256 length: 2 bytes"), "{err}");
    }
}
