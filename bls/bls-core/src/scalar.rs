use core::num::NonZeroU64;

use rand::Rng as _;

/// Weight applied to one set in batch verification.
///
/// Scalars are drawn from `ThreadRng`, which is cryptographically secure.
/// They cannot be constructed from caller-supplied values, so they are never derived from
/// message content and never outlive the verification call that drew them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RandomScalar(NonZeroU64);

impl RandomScalar {
    pub const BYTES: usize = size_of::<NonZeroU64>();
    pub const BITS: usize = Self::BYTES * 8;

    #[must_use]
    pub fn draw(count: usize) -> Vec<Self> {
        let mut rng = rand::thread_rng();

        core::iter::repeat_with(|| Self(rng.gen()))
            .take(count)
            .collect()
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
        self.get().to_le_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_returns_requested_number_of_nonzero_scalars() {
        let scalars = RandomScalar::draw(64);

        assert_eq!(scalars.len(), 64);
        assert!(scalars.iter().all(|scalar| scalar.get() != 0));
    }

    #[test]
    fn consecutive_draws_differ() {
        assert_ne!(RandomScalar::draw(4), RandomScalar::draw(4));
    }
}
