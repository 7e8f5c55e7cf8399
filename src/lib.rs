//! Streaming SHA-256 (FIPS 180-4).
//!
//! ```
//! use streamsha::{calculate, Sha256};
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! assert_eq!(hasher.finalize(), calculate(b"abc"));
//! assert_eq!(
//!     calculate(b"abc").to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

mod compress;
mod digest;
mod error;
mod hash;
mod sha256;

pub use compress::{HashState, BLOCK_SIZE};
pub use digest::{Digest, DIGEST_SIZE};
pub use error::{Error, Result};
pub use hash::Hasher;
pub use sha256::{calculate, finalize, initialize, update, Sha256};

#[cfg(test)]
mod tests {
    use super::*;

    use rayon::prelude::*;

    #[test]
    fn independent_contexts_hash_in_parallel() {
        let messages: Vec<Vec<u8>> = (0..64u8).map(|i| vec![i; i as usize * 17]).collect();

        let parallel: Vec<Digest> = messages
            .par_iter()
            .map(|message| {
                let mut hasher = Sha256::new();
                for chunk in message.chunks(13) {
                    hasher.update(chunk);
                }
                hasher.finalize()
            })
            .collect();

        let sequential: Vec<Digest> = messages.iter().map(|m| calculate(m)).collect();
        assert_eq!(parallel, sequential);
    }
}
