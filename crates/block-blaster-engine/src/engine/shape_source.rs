use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Serialize, Serializer};

use crate::ShapeKind;

/// Supplies the kind of every block the game spawns.
///
/// [`RandomShapes`] is the regular source. Tests plug in scripted sources to
/// control the exact spawn order.
pub trait ShapeSource {
    /// Returns the kind of the next block to spawn.
    fn next_kind(&mut self) -> ShapeKind;
}

/// Uniform random shape source.
///
/// Every draw is independent: the same kind may come up several times in a
/// row. Drawing from a seeded [`Pcg32`] makes the sequence reproducible.
///
/// # Example
///
/// ```
/// use block_blaster_engine::{RandomShapes, ShapeSeed, ShapeSource as _};
///
/// let seed: ShapeSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// let mut a = RandomShapes::with_seed(seed);
/// let mut b = RandomShapes::with_seed(seed);
/// for _ in 0..10 {
///     assert_eq!(a.next_kind(), b.next_kind());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomShapes {
    rng: Pcg32,
}

impl Default for RandomShapes {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomShapes {
    /// Creates a source seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: ShapeSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }
}

impl ShapeSource for RandomShapes {
    fn next_kind(&mut self) -> ShapeKind {
        self.rng.random()
    }
}

/// 128-bit seed for [`RandomShapes`].
///
/// Written as exactly 32 hex digits, most significant byte first. Parsing
/// accepts either case; display and serialization use lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeSeed([u8; 16]);

impl ShapeSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid seed length: expected 32 hex digits, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid seed: {_0:?} is not a hex string")]
    InvalidDigit(#[error(not(source))] String),
}

impl fmt::Display for ShapeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for ShapeSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength(s.len()));
        }
        // `from_str_radix` alone would also accept a leading `+`.
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit(s.to_owned()));
        }
        u128::from_str_radix(s, 16)
            .map(|num| Self(num.to_be_bytes()))
            .map_err(|_| ParseSeedError::InvalidDigit(s.to_owned()))
    }
}

impl Serialize for ShapeSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Allows `rng.random::<ShapeSeed>()`.
impl Distribution<ShapeSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ShapeSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENTIAL: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ];

    mod seed_text {
        use super::*;

        #[test]
        fn test_display_big_endian() {
            let seed = ShapeSeed::from_bytes(SEQUENTIAL);
            assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
        }

        #[test]
        fn test_display_zero_padded() {
            assert_eq!(
                ShapeSeed::from_bytes([0; 16]).to_string(),
                "00000000000000000000000000000000"
            );
        }

        #[test]
        fn test_parse_uppercase() {
            let seed: ShapeSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
            assert_eq!(seed.to_bytes(), SEQUENTIAL);
        }

        #[test]
        fn test_parse_wrong_length() {
            assert_eq!(
                "0123".parse::<ShapeSeed>(),
                Err(ParseSeedError::InvalidLength(4))
            );
            assert_eq!(
                "".parse::<ShapeSeed>(),
                Err(ParseSeedError::InvalidLength(0))
            );
            assert!(
                "0123456789abcdef0123456789abcdef0"
                    .parse::<ShapeSeed>()
                    .is_err()
            );
        }

        #[test]
        fn test_parse_non_hex() {
            let err = "ghijklmnopqrstuvwxyzghijklmnopqr"
                .parse::<ShapeSeed>()
                .unwrap_err();
            assert!(matches!(err, ParseSeedError::InvalidDigit(_)));
            assert!(err.to_string().contains("not a hex string"));
        }

        #[test]
        fn test_parse_rejects_sign() {
            assert!(
                "+123456789abcdef0123456789abcdef"
                    .parse::<ShapeSeed>()
                    .is_err()
            );
        }

        #[test]
        fn test_serde_uses_hex_string() {
            let seed = ShapeSeed::from_bytes(SEQUENTIAL);
            let json = serde_json::to_string(&seed).unwrap();
            assert_eq!(json, "\"0123456789abcdeffedcba9876543210\"");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed: ShapeSeed = rand::rng().random();
        let mut a = RandomShapes::with_seed(seed);
        let mut b = RandomShapes::with_seed(seed);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomShapes::with_seed(ShapeSeed::from_bytes([0; 16]));
        let mut b = RandomShapes::with_seed(ShapeSeed::from_bytes(SEQUENTIAL));
        let a: Vec<_> = (0..50).map(|_| a.next_kind()).collect();
        let b: Vec<_> = (0..50).map(|_| b.next_kind()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_repeats_are_possible() {
        // No bag: over a long run some kind must follow itself.
        let mut source = RandomShapes::with_seed(ShapeSeed::from_bytes(SEQUENTIAL));
        let kinds: Vec<_> = (0..500).map(|_| source.next_kind()).collect();
        assert!(kinds.windows(2).any(|w| w[0] == w[1]));
    }
}
