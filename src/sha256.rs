use std::io;

use log::{debug, trace};

use crate::compress::{compress, Block, HashState, BLOCK_SIZE, INITIAL_STATE};
use crate::{Digest, Error, Hasher, Result, DIGEST_SIZE};

const LENGTH_SIZE: usize = 8;
const LENGTH_OFFSET: usize = BLOCK_SIZE - LENGTH_SIZE;

/// The `0x80` marker followed by enough zeros for the longest padding run.
const PADDING: [u8; BLOCK_SIZE] = {
    let mut padding = [0u8; BLOCK_SIZE];
    padding[0] = 0x80;
    padding
};

/// A streaming SHA-256 context.
///
/// Feed bytes with [`update`](Sha256::update) in chunks of any size, then
/// call [`finalize`](Sha256::finalize). Finalizing consumes the context, so
/// a finished hash cannot be updated again; use
/// [`finalize_reset`](Sha256::finalize_reset) to reuse the same value.
#[derive(Debug, Clone)]
pub struct Sha256 {
    state: HashState,
    /// Bytes absorbed over the context's lifetime.
    total_length: u64,
    buffer: Block,
    /// Always `total_length % 64`.
    buffer_used: usize,
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            total_length: 0,
            buffer: [0u8; BLOCK_SIZE],
            buffer_used: 0,
        }
    }

    /// Build a context as if it had already absorbed `bytes_absorbed` bytes
    /// and reached `state`.
    ///
    /// `bytes_absorbed` must land on a block boundary, since a state alone
    /// cannot describe a partially filled buffer.
    pub fn from_state(state: HashState, bytes_absorbed: u64) -> Result<Self> {
        if bytes_absorbed % BLOCK_SIZE as u64 != 0 {
            debug!("rejecting resume at unaligned length {bytes_absorbed}");
            return Err(Error::UnalignedResume {
                bytes_absorbed,
                block_size: BLOCK_SIZE,
            });
        }
        debug!("resuming sha-256 context after {bytes_absorbed} bytes");
        Ok(Self {
            state,
            total_length: bytes_absorbed,
            buffer: [0u8; BLOCK_SIZE],
            buffer_used: 0,
        })
    }

    pub fn digest_message(message: &[u8]) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(message);
        hasher.finalize()
    }

    /// Put the context back into its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn bytes_absorbed(&self) -> u64 {
        self.total_length
    }

    pub fn update(&mut self, data: &[u8]) {
        self.total_length = self.total_length.wrapping_add(data.len() as u64);

        let mut data = data;
        if self.buffer_used > 0 {
            let to_copy = (BLOCK_SIZE - self.buffer_used).min(data.len());
            self.buffer[self.buffer_used..self.buffer_used + to_copy]
                .copy_from_slice(&data[..to_copy]);
            self.buffer_used += to_copy;
            data = &data[to_copy..];

            if self.buffer_used == BLOCK_SIZE {
                self.state = compress(self.state, &self.buffer);
                self.buffer_used = 0;
            }
        }

        // Whole blocks skip the buffer.
        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_SIZE>() {
            self.state = compress(self.state, block);
            data = rest;
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffer_used = data.len();
        }
    }

    pub fn update_and_finalize(mut self, data: &[u8]) -> Digest {
        self.update(data);
        self.finalize()
    }

    pub fn finalize(mut self) -> Digest {
        self.pad();
        Digest::from_state(&self.state)
    }

    /// Finalize, leaving `self` ready to hash a new message.
    pub fn finalize_reset(&mut self) -> Digest {
        self.pad();
        let digest = Digest::from_state(&self.state);
        self.reset();
        digest
    }

    fn pad(&mut self) {
        let bit_len = self.total_length.wrapping_mul(8);
        trace!(
            "finalizing sha-256 over {} bytes ({} full blocks)",
            self.total_length,
            self.total_length / BLOCK_SIZE as u64
        );

        // Leave exactly eight free bytes in the last block, wrapping into an
        // extra block when the marker does not fit before the length.
        let padding_len = if self.buffer_used < LENGTH_OFFSET {
            LENGTH_OFFSET - self.buffer_used
        } else {
            BLOCK_SIZE + LENGTH_OFFSET - self.buffer_used
        };
        self.update(&PADDING[..padding_len]);
        self.update(&bit_len.to_be_bytes());
        debug_assert_eq!(self.buffer_used, 0);
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher<DIGEST_SIZE> for Sha256 {
    fn update(&mut self, data: &[u8]) {
        Sha256::update(self, data);
    }

    fn finalize(self) -> [u8; DIGEST_SIZE] {
        Sha256::finalize(self).into_bytes()
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Create a fresh context.
pub fn initialize() -> Sha256 {
    Sha256::new()
}

/// Absorb `data` into `context`.
pub fn update(context: &mut Sha256, data: &[u8]) {
    context.update(data);
}

/// Pad and compress the final block(s), consuming `context`.
pub fn finalize(context: Sha256) -> Digest {
    context.finalize()
}

/// Hash `data` in one call.
pub fn calculate(data: &[u8]) -> Digest {
    Sha256::digest_message(data)
}
