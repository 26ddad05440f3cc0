use anyhow::{Context, Result};
use h256conv_codec::{SolanaAddress, H256};
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::{Direction, OutputMode};

const LABEL_WIDTH: usize = 14;
const FORWARD_HINT: &str = "Use this H256 value in your Sol-PBC configuration";

/// Result of one conversion: both forms plus the direction and text the user passed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion<'a> {
    #[serde(skip)]
    pub direction: Direction<'a>,
    pub base58: SolanaAddress,
    pub h256: H256,
}

impl<'a> Conversion<'a> {
    pub fn from_direction(direction: Direction<'a>) -> Result<Self> {
        let (base58, h256) = match direction {
            Direction::Forward(input) => {
                let address: SolanaAddress =
                    input.parse().context("Failed to convert address")?;
                (address, address.to_h256())
            }
            Direction::Reverse(input) => {
                let hash: H256 = input.parse().context("Failed to convert hex")?;
                (hash.to_solana_address(), hash)
            }
        };

        Ok(Self {
            direction,
            base58,
            h256,
        })
    }

    /// The value the user asked for
    pub fn converted(&self) -> String {
        match self.direction {
            Direction::Forward(_) => self.h256.to_string(),
            Direction::Reverse(_) => self.base58.to_string(),
        }
    }

    pub fn render<W: Write>(&self, mode: OutputMode, out: &mut W) -> io::Result<()> {
        match (mode, self.direction) {
            (OutputMode::Quiet, _) => writeln!(out, "{}", self.converted()),
            (OutputMode::Json, _) => {
                serde_json::to_writer(&mut *out, self).map_err(io::Error::from)?;
                writeln!(out)
            }
            (OutputMode::Text, Direction::Reverse(input)) => {
                writeln!(out, "{:<width$}{}", "H256:", input, width = LABEL_WIDTH)?;
                writeln!(out, "{:<width$}{}", "Base58:", self.base58, width = LABEL_WIDTH)
            }
            (OutputMode::Text, Direction::Forward(input)) => {
                writeln!(out, "{:<width$}{}", "Base58:", input, width = LABEL_WIDTH)?;
                writeln!(out, "{:<width$}{}", "H256:", self.h256, width = LABEL_WIDTH)?;
                writeln!(out)?;
                writeln!(out, "{}", FORWARD_HINT)
            }
        }
    }
}
