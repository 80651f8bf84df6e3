//! Password generation.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroizing;

use super::charset::CharClasses;
use crate::error::Result;

/// A generated password. The backing buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep passwords out of debug logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

/// Draws passwords from a cryptographically secure random source.
pub struct Generator<R> {
    rng: R,
}

impl Generator<OsRng> {
    /// Generator backed by the operating system CSPRNG.
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a single password of `length` characters.
    ///
    /// Fails with [`Error::NoCharacterClass`](crate::Error::NoCharacterClass)
    /// before drawing anything when every class is disabled.
    pub fn generate(&mut self, length: usize, classes: &CharClasses) -> Result<Password> {
        let chars = classes.pool()?;
        let mut buf = Zeroizing::new(String::with_capacity(length));
        buf.extend((0..length).map(|_| random_char(&mut self.rng, &chars)));
        Ok(Password(buf))
    }
}

#[inline]
fn random_char<R: Rng>(rng: &mut R, chars: &[u8]) -> char {
    // gen_range rejects out-of-zone samples, so there is no modulo bias.
    char::from(chars[rng.gen_range(0..chars.len())])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::Error;
    use crate::pass::charset::DIGITS;

    fn seeded() -> Generator<StdRng> {
        Generator::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn generates_exact_length_from_pool() {
        let mut generator = seeded();
        let classes = CharClasses::default();
        let pool = classes.pool().unwrap();
        for length in [0, 1, 8, 64, 300] {
            let pass = generator.generate(length, &classes).unwrap();
            assert_eq!(pass.len(), length);
            assert!(pass.as_str().bytes().all(|b| pool.contains(&b)));
        }
    }

    #[test]
    fn respects_disabled_classes() {
        let mut generator = seeded();
        let classes = CharClasses {
            upper: false,
            lower: true,
            digits: false,
            special: false,
        };
        let pass = generator.generate(500, &classes).unwrap();
        assert!(pass.as_str().bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn empty_selection_fails_for_any_length() {
        let mut generator = seeded();
        let none = CharClasses {
            upper: false,
            lower: false,
            digits: false,
            special: false,
        };
        for length in [0, 1, 12, 1000] {
            assert!(matches!(
                generator.generate(length, &none),
                Err(Error::NoCharacterClass)
            ));
        }
    }

    #[test]
    fn draws_are_roughly_uniform() {
        let mut generator = seeded();
        let classes = CharClasses {
            upper: false,
            lower: false,
            digits: true,
            special: false,
        };
        let samples = 100_000;
        let pass = generator.generate(samples, &classes).unwrap();

        let mut counts = [0usize; 10];
        for b in pass.as_str().bytes() {
            counts[(b - b'0') as usize] += 1;
        }
        // Expected 10_000 per digit; sigma is about 95.
        for (digit, &count) in DIGITS.iter().zip(counts.iter()) {
            assert!(
                (9_400..=10_600).contains(&count),
                "digit {} drawn {} times",
                *digit as char,
                count
            );
        }
    }

    #[test]
    fn os_source_does_not_repeat() {
        let mut a = Generator::os();
        let mut b = Generator::os();
        let classes = CharClasses::default();
        let first = a.generate(32, &classes).unwrap();
        let second = b.generate(32, &classes).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn debug_output_hides_password() {
        let pass = seeded().generate(12, &CharClasses::default()).unwrap();
        let shown = format!("{:?}", pass);
        assert_eq!(shown, "Password(<12 chars>)");
    }
}
