pub mod error;
pub mod utils;

pub use error::{CodecError, Encoding, Result};
