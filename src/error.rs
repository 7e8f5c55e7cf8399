//! Error types for streamsha.
//!
//! Hashing never fails; these cover building digests and contexts from
//! caller-supplied values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A context can only be resumed at a block boundary.
    #[error("cannot resume from {bytes_absorbed} absorbed bytes: not a multiple of {block_size}")]
    UnalignedResume {
        bytes_absorbed: u64,
        block_size: usize,
    },

    #[error("invalid digest length: expected {expected} bytes, found {found}")]
    InvalidDigestLength { expected: usize, found: usize },

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaligned_resume_message_names_byte_count() {
        let err = Error::UnalignedResume {
            bytes_absorbed: 65,
            block_size: 64,
        };

        assert_eq!(
            err.to_string(),
            "cannot resume from 65 absorbed bytes: not a multiple of 64"
        );
    }

    #[test]
    fn hex_errors_convert_into_invalid_hex() {
        let err: Error = hex::decode("zz").unwrap_err().into();

        assert!(matches!(err, Error::InvalidHex(_)));
    }
}
