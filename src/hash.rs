/// An incremental hash over byte streams producing an `N`-byte digest.
pub trait Hasher<const N: usize>: Default {
    fn update(&mut self, data: &[u8]);

    fn finalize(self) -> [u8; N];

    fn digest_message(message: &[u8]) -> [u8; N] {
        let mut hasher = Self::default();
        hasher.update(message);
        hasher.finalize()
    }

    fn update_and_finalize(mut self, data: &[u8]) -> [u8; N] {
        self.update(data);
        self.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{calculate, Sha256, DIGEST_SIZE};

    fn digest_in_two_parts<H: Hasher<N>, const N: usize>(a: &[u8], b: &[u8]) -> [u8; N] {
        let mut hasher = H::default();
        hasher.update(a);
        hasher.update_and_finalize(b)
    }

    #[test]
    fn generic_digest_matches_calculate() {
        let digest = <Sha256 as Hasher<DIGEST_SIZE>>::digest_message(b"abc");

        assert_eq!(digest, calculate(b"abc").into_bytes());
    }

    #[test]
    fn generic_streaming_matches_one_shot() {
        let digest =
            digest_in_two_parts::<Sha256, DIGEST_SIZE>(b"We all live in a ", b"yellow submarine.");

        assert_eq!(
            digest,
            calculate(b"We all live in a yellow submarine.").into_bytes()
        );
    }
}
